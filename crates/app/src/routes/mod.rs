pub mod about;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use crate::config::app_config;
use access::guard::{decide, decide_for, GuardDecision};
use access::nav::{is_active, visible_entries, NavIcon, MENU};
use access::routes::descriptor;
use access::SidebarView;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdHouse, LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;
use shared_ui::{
    Badge, BadgeTone, ConfirmDialog, FullPageLoader, Sidebar, SidebarContent, SidebarFooter,
    SidebarHeader, SidebarInset, SidebarLayout, SidebarMenu, SidebarMenuButton, SidebarTrigger,
};

use about::About;
use dashboard::Dashboard;
use home::Home;
use login::Login;
use not_found::{NotFound, Root};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
        #[layout(AppLayout)]
            #[route("/home")]
            Home {},
            #[route("/about")]
            About {},
            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Router target for one of the static paths in `access::routes`.
pub fn route_for_path(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Login {})
}

/// Reports whether the viewport is at most 768px wide, once on start and
/// again every time it crosses that width.
const NARROW_VIEWPORT_JS: &str = r#"
    const query = window.matchMedia('(max-width: 768px)');
    dioxus.send(query.matches);
    query.addEventListener('change', (e) => dioxus.send(e.matches));
    await new Promise(() => {});
"#;

/// Applies the route table to the current session before rendering any
/// protected page.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let path = route.to_string();
    let session = auth.session();

    let decision = match descriptor(&path) {
        Some(route) => decide_for(&session, route),
        None => decide(&session, &[]),
    };

    match decision {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectToLogin => {
            navigator().replace(Route::Login {});
            rsx! {
                FullPageLoader { message: "Redirecting to login..." }
            }
        }
        GuardDecision::Forbidden { redirect_to } => {
            tracing::warn!(
                path = %path,
                role = session.role().map(|r| r.as_str()).unwrap_or_default(),
                "role not permitted on route"
            );
            navigator().replace(route_for_path(redirect_to));
            rsx! {
                FullPageLoader { message: "Redirecting..." }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon::<LdHouse> { icon: LdHouse, width: 18, height: 18 } },
        NavIcon::About => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
    }
}

/// Main app layout with the role-filtered sidebar and a top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let company = &app_config().company;
    let mut view = use_signal(SidebarView::default);
    let mut confirm_logout = use_signal(|| false);

    use_future(move || async move {
        let mut watcher = document::eval(NARROW_VIEWPORT_JS);
        loop {
            match watcher.recv::<bool>().await {
                Ok(narrow) => view.write().set_narrow(narrow),
                Err(e) => {
                    tracing::debug!(error = ?e, "viewport watcher stopped");
                    break;
                }
            }
        }
    });

    let session = auth.session();
    let Some(user) = session.user().cloned() else {
        return rsx! {};
    };
    let collapsed = view().collapsed(auth.sidebar_collapsed());
    let current_path = route.to_string();
    let entries = visible_entries(&session, MENU);

    let page_title = match &route {
        Route::Home {} => "Home",
        Route::About {} => "About",
        Route::Dashboard {} => "Dashboard",
        _ => "",
    };

    let handle_logout = move |_| {
        confirm_logout.set(false);
        auth.logout();
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarLayout { collapsed,
            Sidebar {
                collapsed,
                on_dismiss: move |_| view.write().dismiss(),
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-logo", "{company.logo}" }
                        span { class: "sidebar-brand-text", "{company.name}" }
                    }
                }
                if !collapsed {
                    div { class: "sidebar-user",
                        div { class: "sidebar-user-avatar", {user.initial()} }
                        div { class: "sidebar-user-details",
                            span { class: "sidebar-user-name", "{user.name}" }
                            span { class: "sidebar-user-email", "{user.email}" }
                            Badge { tone: BadgeTone::Info, {user.role.label()} }
                        }
                    }
                }
                SidebarContent {
                    SidebarMenu {
                        for entry in entries {
                            SidebarMenuButton {
                                key: "{entry.key}",
                                label: "{entry.label}",
                                icon: nav_icon(entry.icon),
                                active: is_active(entry, &current_path),
                                onclick: move |_| {
                                    navigator().push(route_for_path(entry.path));
                                    view.write().dismiss();
                                },
                            }
                        }
                    }
                }
                SidebarFooter {
                    SidebarMenu {
                        SidebarMenuButton {
                            label: "Logout",
                            icon: rsx! { Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 } },
                            onclick: move |_| confirm_logout.set(true),
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        collapsed,
                        onclick: move |_| {
                            if !view.write().toggle_narrow() {
                                auth.toggle_sidebar();
                            }
                        },
                        span { class: "topbar-trigger-glyph",
                            if collapsed { "\u{00BB}" } else { "\u{00AB}" }
                        }
                    }
                    h2 { class: "topbar-title", "{page_title}" }
                }
                main { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }

        ConfirmDialog {
            open: confirm_logout(),
            on_open_change: move |open| confirm_logout.set(open),
            on_confirm: handle_logout,
            title: "Logout",
            description: "Are you sure you want to logout?",
            confirm_label: "Logout",
            destructive: true,
        }
    }
}
