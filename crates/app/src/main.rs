use dioxus::prelude::*;

mod auth;
mod config;
mod format_helpers;
mod routes;
use auth::AuthState;
use config::app_config;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config_error = config::load_config();

    let level = config::tracing_level(app_config().logging.level);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger init failed: {e}");
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "config.toml is invalid; using defaults");
    }
    tracing::info!(platform = client_platform(), "starting portal");

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
