use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reporting window picked on the analytics dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    ThisWeek,
    #[default]
    ThisMonth,
    LastMonth,
    ThisYear,
}

pub const ALL_PERIODS: &[Period] = &[
    Period::ThisWeek,
    Period::ThisMonth,
    Period::LastMonth,
    Period::ThisYear,
];

impl Period {
    /// Value used in the `<select>` element.
    pub fn key(&self) -> &'static str {
        match self {
            Period::ThisWeek => "thisWeek",
            Period::ThisMonth => "thisMonth",
            Period::LastMonth => "lastMonth",
            Period::ThisYear => "thisYear",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::ThisWeek => "This Week",
            Period::ThisMonth => "This Month",
            Period::LastMonth => "Last Month",
            Period::ThisYear => "This Year",
        }
    }

    /// Parse a `<select>` value, falling back to the default period.
    pub fn from_key(key: &str) -> Self {
        ALL_PERIODS
            .iter()
            .copied()
            .find(|p| p.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "\u{2705}",
            AttendanceStatus::Late => "\u{23F0}",
            AttendanceStatus::Absent => "\u{274C}",
        }
    }
}

/// One day on the attendance grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// Hours worked, one decimal place; `0.0` when nothing was logged.
    pub hours: f32,
}

impl AttendanceDay {
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// Tooltip text: `2025-04-01 - present - 7.5h`.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} - {:.1}h",
            self.date.format("%Y-%m-%d"),
            self.status.as_str(),
            self.hours
        )
    }
}

/// Leave allowance of one kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveBalance {
    pub kind: String,
    pub used: u32,
    pub total: u32,
}

impl LeaveBalance {
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }

    /// Share of the allowance used, 0–100.
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.used) / f64::from(self.total) * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}
