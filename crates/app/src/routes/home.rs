use crate::auth::use_current_user;
use crate::config::app_config;
use crate::format_helpers::{format_clock, format_long_date, greeting_for_hour};
use chrono::{Local, Timelike};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdCalendar, LdClock, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, StatCard};

pub struct Announcement {
    pub title: &'static str,
    pub time: &'static str,
    pub icon: &'static str,
}

pub const ANNOUNCEMENTS: &[Announcement] = &[
    Announcement {
        title: "New company policy has been announced",
        time: "2 hours ago",
        icon: "\u{1F4E2}",
    },
    Announcement {
        title: "Team meeting scheduled for tomorrow at 10 AM",
        time: "4 hours ago",
        icon: "\u{1F91D}",
    },
    Announcement {
        title: "System maintenance scheduled for weekend",
        time: "1 day ago",
        icon: "\u{1F527}",
    },
];

/// `(label, icon)` of the quick-action buttons.
pub const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("Mark Attendance", "\u{2705}"),
    ("Request Leave", "\u{1F4CB}"),
    ("View Payslip", "\u{1F4B8}"),
    ("Update Profile", "\u{1F464}"),
];

/// Resolves after one second. Awaited in a loop by the clock task, which is
/// dropped with the component.
const ONE_SECOND_JS: &str = "await new Promise(r => setTimeout(r, 1000)); return true;";

#[component]
pub fn Home() -> Element {
    let user = use_current_user();
    let live_clock = app_config().features.live_clock;
    let mut now = use_signal(Local::now);

    use_future(move || async move {
        if !live_clock {
            return;
        }
        loop {
            if let Err(e) = document::eval(ONE_SECOND_JS).join::<bool>().await {
                tracing::debug!(error = ?e, "clock stopped");
                break;
            }
            now.set(Local::now());
        }
    });

    let name = user.map(|u| u.name).unwrap_or_default();
    let current = now();
    let greeting = greeting_for_hour(current.hour());
    let clock = format_clock(&current);
    let date = format_long_date(current.date_naive());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "page home-page",
            header { class: "page-header home-hero",
                div {
                    h1 { class: "page-title", "Welcome back, {name}! \u{1F44B}" }
                    p { class: "page-subtitle",
                        "{greeting}. Here's what's happening in your dashboard today"
                    }
                }
                div { class: "home-clock",
                    div { class: "home-clock-time", "{clock}" }
                    div { class: "home-clock-date", "{date}" }
                }
            }

            div { class: "metric-grid",
                StatCard {
                    label: "Present",
                    value: "22",
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
                }
                StatCard {
                    label: "Leave",
                    value: "6",
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                }
                StatCard {
                    label: "Next Payday",
                    value: "Apr 29",
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
                }
            }

            div { class: "home-columns",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                            " Recent Announcements"
                        }
                    }
                    CardContent {
                        ul { class: "announcement-list",
                            for item in ANNOUNCEMENTS {
                                li { key: "{item.title}", class: "announcement",
                                    span { class: "announcement-icon", "{item.icon}" }
                                    div {
                                        p { class: "announcement-title", "{item.title}" }
                                        span { class: "announcement-time", "{item.time}" }
                                    }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "\u{26A1} Quick Actions" }
                    }
                    CardContent {
                        div { class: "quick-actions",
                            for (label, icon) in QUICK_ACTIONS.iter().copied() {
                                button {
                                    key: "{label}",
                                    class: "quick-action",
                                    r#type: "button",
                                    onclick: move |_| tracing::info!(action = label, "quick action selected"),
                                    span { class: "quick-action-icon", "{icon}" }
                                    span { class: "quick-action-label", "{label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
