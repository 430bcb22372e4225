use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::time_entry::{
    EntryTarget, NewTimeEntry as DomainNewTimeEntry, TimeEntry as DomainTimeEntry,
    TimeEntryUpdate,
};
use crate::domain::types::{
    BillingPackage, CategoryId, EntryHours, TaskKey, TypeConstraintError,
};

/// Diesel model representing a row in the `time_entries` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::time_entries)]
pub struct TimeEntry {
    pub id: i32,
    pub description: Option<String>,
    pub hours: Option<f64>,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub jira_task_id: Option<String>,
    pub billing_package: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`TimeEntry`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::time_entries)]
pub struct NewTimeEntry<'a> {
    pub description: Option<&'a str>,
    pub hours: Option<f64>,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub jira_task_id: Option<&'a str>,
    pub billing_package: Option<&'a str>,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for partial updates; `None` fields are skipped.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::time_entries)]
pub struct TimeEntryChangeset<'a> {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    /// `Some(None)` writes NULL.
    pub description: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

fn target_from_columns(
    jira_task_id: Option<String>,
    billing_package: Option<String>,
    category_id: Option<i32>,
) -> Result<EntryTarget, TypeConstraintError> {
    let task = jira_task_id.filter(|key| !key.trim().is_empty());
    match (task, category_id) {
        (Some(key), None) => Ok(EntryTarget::Task {
            key: TaskKey::new(key)?,
            billing_package: billing_package
                .filter(|p| !p.trim().is_empty())
                .map(BillingPackage::new)
                .transpose()?,
        }),
        (None, Some(category_id)) => Ok(EntryTarget::Category {
            category_id: CategoryId::new(category_id)?,
        }),
        (Some(_), Some(_)) => Err(TypeConstraintError::InvalidValue(
            "time entry references both a task and a category".to_string(),
        )),
        (None, None) => Err(TypeConstraintError::InvalidValue(
            "time entry references neither a task nor a category".to_string(),
        )),
    }
}

impl TryFrom<TimeEntry> for DomainTimeEntry {
    type Error = TypeConstraintError;

    fn try_from(entry: TimeEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entry.id.try_into()?,
            description: entry.description,
            hours: entry.hours.map(EntryHours::new).transpose()?,
            date: entry.date,
            end_date: entry.end_date,
            target: target_from_columns(
                entry.jira_task_id,
                entry.billing_package,
                entry.category_id,
            )?,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewTimeEntry> for NewTimeEntry<'a> {
    fn from(entry: &'a DomainNewTimeEntry) -> Self {
        let (jira_task_id, billing_package, category_id) = match &entry.target {
            EntryTarget::Task {
                key,
                billing_package,
            } => (
                Some(key.as_str()),
                billing_package.as_ref().map(BillingPackage::as_str),
                None,
            ),
            EntryTarget::Category { category_id } => (None, None, Some(category_id.get())),
        };

        Self {
            description: entry.description.as_deref(),
            hours: entry.hours.map(EntryHours::get),
            date: entry.date,
            end_date: entry.end_date,
            jira_task_id,
            billing_package,
            category_id,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

impl<'a> TimeEntryChangeset<'a> {
    pub fn new(update: &'a TimeEntryUpdate, updated_at: NaiveDateTime) -> Self {
        Self {
            date: update.date,
            hours: update.hours.map(EntryHours::get),
            description: update.description.as_ref().map(Option::as_deref),
            updated_at,
        }
    }
}
