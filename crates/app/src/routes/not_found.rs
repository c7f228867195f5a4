use crate::auth::use_auth;
use crate::routes::route_for_path;
use access::routes::landing_path;
use dioxus::prelude::*;
use shared_ui::FullPageLoader;

/// `/`: straight to the landing page for the current session.
#[component]
pub fn Root() -> Element {
    let auth = use_auth();
    navigator().replace(route_for_path(landing_path(&auth.session())));

    rsx! {
        FullPageLoader {}
    }
}

/// Unknown paths are not shown; they redirect like `/`.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let target = landing_path(&auth.session());
    tracing::debug!(path = %format!("/{}", route.join("/")), target, "unknown path");
    navigator().replace(route_for_path(target));

    rsx! {
        FullPageLoader { message: "Redirecting..." }
    }
}
