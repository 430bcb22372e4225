use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{BillingPackage, CategoryId, EntryHours, TaskKey, TimeEntryId};

/// What a time entry is booked against: an external task or a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryTarget {
    Task {
        key: TaskKey,
        billing_package: Option<BillingPackage>,
    },
    Category { category_id: CategoryId },
}

impl EntryTarget {
    pub fn category_id(&self) -> Option<CategoryId> {
        match self {
            Self::Category { category_id } => Some(*category_id),
            Self::Task { .. } => None,
        }
    }
}

/// Logged time, either hourly or (for day-based categories) without hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub description: Option<String>,
    pub hours: Option<EntryHours>,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub target: EntryTarget,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TimeEntry {
    /// Last date covered by the entry; single-day entries end where they start.
    pub fn last_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.date).max(self.date)
    }

    /// Whether the entry counts towards `day`.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.date <= day && day <= self.last_date()
    }
}

/// Data required to insert a new [`TimeEntry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTimeEntry {
    pub description: Option<String>,
    pub hours: Option<EntryHours>,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub target: EntryTarget,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial update of a stored entry. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeEntryUpdate {
    pub date: Option<NaiveDate>,
    pub hours: Option<EntryHours>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl TimeEntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.hours.is_none() && self.description.is_none()
    }
}
