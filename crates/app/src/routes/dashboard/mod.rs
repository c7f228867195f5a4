pub mod attendance;
pub mod leave;

use attendance::{generate_attendance, AttendanceOverview, HISTORY_DAYS};
use chrono::Local;
use dioxus::prelude::*;
use leave::LeaveBalances;
use shared_types::{Period, Trend, ALL_PERIODS};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Delta, FormSelect, StatCard};

pub struct PerformanceMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub const PERFORMANCE_METRICS: &[PerformanceMetric] = &[
    PerformanceMetric {
        label: "Attendance Rate",
        value: "96.5%",
        change: "+2.1%",
        trend: Trend::Up,
    },
    PerformanceMetric {
        label: "On-time Rate",
        value: "89.2%",
        change: "-1.3%",
        trend: Trend::Down,
    },
    PerformanceMetric {
        label: "Overtime Hours",
        value: "24.5h",
        change: "+5.2h",
        trend: Trend::Up,
    },
    PerformanceMetric {
        label: "Tasks Completed",
        value: "87",
        change: "+12",
        trend: Trend::Up,
    },
];

pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
    pub when: &'static str,
    pub icon: &'static str,
}

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        action: "Checked in",
        time: "9:15 AM",
        when: "Today",
        icon: "\u{1F7E2}",
    },
    Activity {
        action: "Submitted timesheet",
        time: "6:30 PM",
        when: "Yesterday",
        icon: "\u{1F4DD}",
    },
    Activity {
        action: "Leave request approved",
        time: "2:45 PM",
        when: "2 days ago",
        icon: "\u{2705}",
    },
    Activity {
        action: "Updated profile",
        time: "11:20 AM",
        when: "3 days ago",
        icon: "\u{1F464}",
    },
    Activity {
        action: "Completed training",
        time: "4:15 PM",
        when: "1 week ago",
        icon: "\u{1F393}",
    },
    Activity {
        action: "Joined team meeting",
        time: "10:00 AM",
        when: "1 week ago",
        icon: "\u{1F465}",
    },
];

fn delta(trend: Trend) -> Delta {
    match trend {
        Trend::Up => Delta::Up,
        Trend::Down => Delta::Down,
    }
}

/// Analytics dashboard for managers, HR and admins.
#[component]
pub fn Dashboard() -> Element {
    let mut period = use_signal(Period::default);

    // Regenerated whenever the period changes.
    let attendance = use_memo(move || {
        let selected = period();
        tracing::debug!(period = selected.key(), "generating attendance data");
        generate_attendance(&mut rand::thread_rng(), Local::now().date_naive(), HISTORY_DAYS)
    });

    let period_options: Vec<(String, String)> = ALL_PERIODS
        .iter()
        .map(|p| (p.key().to_string(), p.label().to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "page dashboard-page",
            header { class: "page-header",
                div {
                    h1 { class: "page-title", "\u{1F4CA} Analytics Dashboard" }
                    p { class: "page-subtitle", "Track your performance and attendance insights" }
                }
                FormSelect {
                    id: "dashboard-period",
                    value: period().key().to_string(),
                    options: period_options,
                    onchange: move |key: String| period.set(Period::from_key(&key)),
                }
            }

            div { class: "metric-grid",
                for metric in PERFORMANCE_METRICS {
                    StatCard {
                        key: "{metric.label}",
                        label: "{metric.label}",
                        value: "{metric.value}",
                        delta: (delta(metric.trend), metric.change.to_string()),
                    }
                }
            }

            div { class: "dashboard-columns",
                AttendanceOverview { days: attendance() }
                LeaveBalances {}
            }

            Card { class: "activity-card",
                CardHeader {
                    CardTitle { "\u{1F4CB} Recent Activity" }
                }
                CardContent {
                    ul { class: "activity-list",
                        for activity in RECENT_ACTIVITY {
                            li { key: "{activity.action}", class: "activity-item",
                                span { class: "activity-icon", "{activity.icon}" }
                                div {
                                    p { class: "activity-action", "{activity.action}" }
                                    span { class: "activity-time", "{activity.time} \u{2022} {activity.when}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
