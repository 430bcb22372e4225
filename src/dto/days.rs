use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::daily_work_time::DailyWorkTime;
use crate::domain::hours::format_hours;
use crate::domain::reconciliation::DayStatus;

/// Reconciliation result of a single date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummaryDto {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub entry_count: usize,
    pub logged_hours: f64,
    pub logged_display: String,
    pub office_hours: Option<f64>,
    pub office_display: Option<String>,
    /// Logged minus office hours, when office time is recorded.
    pub difference: Option<f64>,
}

impl DaySummaryDto {
    pub fn new(
        date: NaiveDate,
        status: DayStatus,
        entry_count: usize,
        logged_hours: f64,
        office_hours: Option<f64>,
    ) -> Self {
        Self {
            date,
            status,
            entry_count,
            logged_hours,
            logged_display: format_hours(logged_hours),
            office_hours,
            office_display: office_hours.map(format_hours),
            difference: office_hours.map(|office| logged_hours - office),
        }
    }

    /// Signed difference rendered as `+1h15m` / `-30m`.
    pub fn difference_display(&self) -> Option<String> {
        self.difference.map(|diff| {
            let sign = if diff < 0.0 { "-" } else { "+" };
            format!("{sign}{}", format_hours(diff.abs()))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWorkTimeDto {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub total_display: String,
}

impl From<DailyWorkTime> for DailyWorkTimeDto {
    fn from(value: DailyWorkTime) -> Self {
        let total_hours = value.total_hours.get();
        Self {
            date: value.date,
            total_hours,
            total_display: format_hours(total_hours),
        }
    }
}
