use crate::format_helpers::{weekday_column, WEEKDAY_INITIALS};
use chrono::{Duration, NaiveDate};
use dioxus::prelude::*;
use rand::Rng;
use shared_types::{AttendanceDay, AttendanceStatus};
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

/// Days of history generated for the overview.
pub const HISTORY_DAYS: usize = 30;
/// Trailing days shown in the grid, three full weeks.
pub const GRID_DAYS: usize = 21;

const PRESENT_PROBABILITY: f64 = 0.9;
const HOURS_LOGGED_PROBABILITY: f64 = 0.9;

/// Mock attendance for the `days` consecutive days ending on `today`,
/// oldest first.
///
/// A day is present with probability 0.9, otherwise late or absent with
/// equal odds. Hours are drawn independently: 7.0 to 9.0 in tenths with
/// probability 0.9, else zero.
pub fn generate_attendance<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    days: usize,
) -> Vec<AttendanceDay> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let status = if rng.gen_bool(PRESENT_PROBABILITY) {
                AttendanceStatus::Present
            } else if rng.gen_bool(0.5) {
                AttendanceStatus::Late
            } else {
                AttendanceStatus::Absent
            };
            let hours = if rng.gen_bool(HOURS_LOGGED_PROBABILITY) {
                rng.gen_range(70..=90) as f32 / 10.0
            } else {
                0.0
            };
            AttendanceDay {
                date,
                status,
                hours,
            }
        })
        .collect()
}

/// The last `n` days, or all of them when fewer exist.
pub fn trailing(days: &[AttendanceDay], n: usize) -> &[AttendanceDay] {
    &days[days.len().saturating_sub(n)..]
}

/// Calendar grid of recent attendance with a weekday header and legend.
#[component]
pub fn AttendanceOverview(days: Vec<AttendanceDay>) -> Element {
    let shown = trailing(&days, GRID_DAYS).to_vec();
    let leading_blanks = shown.first().map(|d| weekday_column(d.date)).unwrap_or(0);

    rsx! {
        Card { class: "attendance-card",
            CardHeader {
                CardTitle { "\u{1F4C5} Attendance Overview" }
            }
            CardContent {
                div { class: "attendance-grid attendance-weekdays",
                    for (i, initial) in WEEKDAY_INITIALS.iter().enumerate() {
                        div { key: "{i}", class: "attendance-weekday", "{initial}" }
                    }
                }
                div { class: "attendance-grid",
                    for i in 0..leading_blanks {
                        div { key: "blank-{i}", class: "attendance-blank" }
                    }
                    for day in shown {
                        div {
                            key: "{day.date}",
                            class: "attendance-day",
                            "data-status": day.status.as_str(),
                            title: day.summary(),
                            span { class: "attendance-day-number", {day.day_of_month().to_string()} }
                            span { class: "attendance-day-icon", {day.status.icon()} }
                        }
                    }
                }
                div { class: "attendance-legend",
                    for status in [AttendanceStatus::Present, AttendanceStatus::Late, AttendanceStatus::Absent] {
                        span { key: "{status:?}", class: "attendance-legend-item",
                            span { class: "attendance-swatch", "data-status": status.as_str() }
                            {legend_label(status)}
                        }
                    }
                }
            }
        }
    }
}

fn legend_label(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "Present",
        AttendanceStatus::Late => "Late",
        AttendanceStatus::Absent => "Absent",
    }
}
