//! Day-level comparison of logged task time against office time.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Maximum difference in hours between logged and office time for a
/// complete day.
pub const OFFICE_TIME_TOLERANCE_HOURS: f64 = 0.5;

/// Reconciliation outcome for a single date.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Weekend,
    Future,
    Missing,
    NoOfficeTime,
    NoEntries,
    Mismatch,
    Complete,
}

impl DayStatus {
    /// Classifies `date` given the hours of its entries and its office time.
    ///
    /// Entries without hours (day-based categories) count as present but add
    /// nothing to the total. Zero office time counts as absent. Weekend and
    /// future dates short-circuit before any data is looked at.
    pub fn classify(
        date: NaiveDate,
        entry_hours: &[Option<f64>],
        office_time: Option<f64>,
        today: NaiveDate,
    ) -> Self {
        if is_weekend(date) {
            return Self::Weekend;
        }
        if date > today {
            return Self::Future;
        }

        let office_time = office_time.filter(|hours| *hours > 0.0);
        match (entry_hours.is_empty(), office_time) {
            (true, None) => Self::Missing,
            (false, None) => Self::NoOfficeTime,
            (true, Some(_)) => Self::NoEntries,
            (false, Some(office)) => {
                if (logged_hours(entry_hours) - office).abs() > OFFICE_TIME_TOLERANCE_HOURS {
                    Self::Mismatch
                } else {
                    Self::Complete
                }
            }
        }
    }

    /// Same as [`Self::classify`] with today taken from the local clock.
    pub fn classify_now(
        date: NaiveDate,
        entry_hours: &[Option<f64>],
        office_time: Option<f64>,
    ) -> Self {
        Self::classify(
            date,
            entry_hours,
            office_time,
            chrono::Local::now().date_naive(),
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekend => "weekend",
            Self::Future => "future",
            Self::Missing => "missing",
            Self::NoOfficeTime => "no-office-time",
            Self::NoEntries => "no-entries",
            Self::Mismatch => "mismatch",
            Self::Complete => "complete",
        }
    }

    /// Whether the day needs the user's attention.
    pub const fn needs_attention(self) -> bool {
        matches!(
            self,
            Self::Missing | Self::NoOfficeTime | Self::NoEntries | Self::Mismatch
        )
    }
}

impl Display for DayStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Sum of entry hours; entries without hours contribute zero.
pub fn logged_hours(entry_hours: &[Option<f64>]) -> f64 {
    entry_hours.iter().flatten().sum()
}
