//! Date and time formatting for the UI layer.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};

/// Wall-clock time as "9:05:07 AM".
pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let (pm, hour) = at.hour12();
    format!(
        "{}:{:02}:{:02} {}",
        hour,
        at.minute(),
        at.second(),
        if pm { "PM" } else { "AM" }
    )
}

/// Long date as "Tuesday, April 1, 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Greeting for the hour of day.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Single-letter weekday header, Sunday first, for a 7-column calendar grid.
pub const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Column of `date` in a Sunday-first week.
pub fn weekday_column(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}
