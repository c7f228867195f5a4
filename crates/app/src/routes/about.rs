use crate::auth::use_auth;
use crate::config::app_config;
use access::nav::MENU;
use access::routes::reachable_paths;
use dioxus::prelude::*;
use shared_ui::{Badge, BadgeTone, Card, CardContent, CardHeader, CardTitle};

const FEATURES: &[&str] = &[
    "A personal home page with announcements and quick actions",
    "Attendance, leave and performance analytics for managers",
    "Role-aware navigation that only shows the pages you can open",
];

/// Menu labels for the pages `paths` covers, falling back to the raw path.
fn page_labels(paths: &[&'static str]) -> Vec<&'static str> {
    paths
        .iter()
        .map(|path| {
            MENU.iter()
                .find(|entry| entry.path == *path)
                .map(|entry| entry.label)
                .unwrap_or(*path)
        })
        .collect()
}

#[component]
pub fn About() -> Element {
    let auth = use_auth();
    let company = &app_config().company;
    let role = auth.role();
    let pages = role.map(|r| page_labels(&reachable_paths(r))).unwrap_or_default();

    rsx! {
        div { class: "page about-page",
            header { class: "page-header",
                div {
                    h1 { class: "page-title", "About {company.name}" }
                    p { class: "page-subtitle", "{company.tagline}" }
                }
            }

            div { class: "home-columns",
                Card {
                    CardHeader {
                        CardTitle { "What this portal offers" }
                    }
                    CardContent {
                        ul { class: "about-list",
                            for feature in FEATURES {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Your access" }
                        if let Some(role) = role {
                            Badge { tone: BadgeTone::Info, {role.label()} }
                        }
                    }
                    CardContent {
                        p { "You can open these pages:" }
                        div { class: "about-pages",
                            for label in pages {
                                Badge { key: "{label}", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
