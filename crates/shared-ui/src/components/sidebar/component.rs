use dioxus::prelude::*;

// ─── Shell ─────────────────────────────────────────────────────────────

fn collapsed_state(collapsed: bool) -> &'static str {
    if collapsed {
        "collapsed"
    } else {
        "expanded"
    }
}

/// Outer flex container for a sidebar plus its inset. The collapse flag
/// is owned by the caller and mirrored into `data-state` for styling.
#[component]
pub fn SidebarLayout(collapsed: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-layout",
            "data-state": collapsed_state(collapsed),
            {children}
        }
    }
}

/// The navigation rail. When expanded on a narrow viewport a backdrop is
/// drawn behind it; tapping the backdrop calls `on_dismiss`.
#[component]
pub fn Sidebar(
    collapsed: bool,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", collapsed_state(collapsed), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if !collapsed {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| {
                    if let Some(handler) = &on_dismiss {
                        handler.call(());
                    }
                },
            }
        }
        aside {
            "aria-label": "Main navigation",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// One navigation row: icon plus label. The label is hidden while the
/// sidebar is collapsed and doubles as the tooltip.
#[component]
pub fn SidebarMenuButton(
    label: String,
    icon: Element,
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                r#type: "button",
                title: "{label}",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| onclick.call(evt),
                span { class: "sidebar-menu-icon", {icon} }
                span { class: "sidebar-menu-label", "{label}" }
            }
        }
    }
}

// ─── Utility ───────────────────────────────────────────────────────────

/// Button that asks the owner to flip the collapse flag.
#[component]
pub fn SidebarTrigger(
    collapsed: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
            "aria-expanded": if collapsed { "false" } else { "true" },
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Main content column next to the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
