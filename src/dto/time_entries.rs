use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::hours::format_hours;
use crate::domain::time_entry::{EntryTarget, TimeEntry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntryDto {
    pub id: i32,
    pub description: Option<String>,
    pub hours: Option<f64>,
    /// `hours` rendered as `2h30m`; absent for day-based entries.
    pub hours_display: Option<String>,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub jira_task_id: Option<String>,
    pub billing_package: Option<String>,
    pub category_id: Option<i32>,
}

impl From<TimeEntry> for TimeEntryDto {
    fn from(value: TimeEntry) -> Self {
        let hours = value.hours.map(f64::from);
        let (jira_task_id, billing_package, category_id) = match value.target {
            EntryTarget::Task {
                key,
                billing_package,
            } => (
                Some(key.into_inner()),
                billing_package.map(String::from),
                None,
            ),
            EntryTarget::Category { category_id } => (None, None, Some(category_id.get())),
        };

        Self {
            id: value.id.get(),
            description: value.description,
            hours,
            hours_display: hours.map(format_hours),
            date: value.date,
            end_date: value.end_date,
            jira_task_id,
            billing_package,
            category_id,
        }
    }
}

/// One page of time entries together with the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntryPageDto {
    pub total: usize,
    pub items: Vec<TimeEntryDto>,
}
