//! Time entry forms and the rule list that decides whether a submission can
//! be stored.
//!
//! Field-level limits are checked with `validator`; cross-field rules are
//! plain functions collected in [`DEFAULT_RULES`]. Each rule reports its own
//! messages, and a submission is valid only when no rule reports anything.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::hours::{TimeInputError, parse_time_input, round_to_quarter_hour};
use crate::domain::time_entry::{EntryTarget, NewTimeEntry, TimeEntryUpdate};
use crate::domain::types::{
    BillingPackage, CategoryId, CategoryKind, EntryHours, TaskKey, TimeEntryId,
    TypeConstraintError,
};

/// What the user chose to book the entry against.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Jira,
    Category,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddTimeEntryForm {
    pub entry_type: EntryType,
    #[validate(length(max = 64))]
    pub jira_task_id: Option<String>,
    #[validate(length(max = 128))]
    pub billing_package: Option<String>,
    pub category_id: Option<i32>,
    /// Duration as typed, e.g. `2h30m`.
    pub time: Option<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// A proposed time entry as seen by the entry rules.
///
/// Carries the kind of the selected category, which the rules need and the
/// form alone does not know.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntrySubmission {
    pub entry_type: EntryType,
    pub jira_task_id: Option<String>,
    pub billing_package: Option<String>,
    pub category_id: Option<i32>,
    pub category_kind: Option<CategoryKind>,
    pub time: Option<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TimeEntrySubmission {
    /// Checks field limits and normalises blank strings to `None`.
    pub fn from_form(
        form: AddTimeEntryForm,
        category_kind: Option<CategoryKind>,
    ) -> Result<Self, AddTimeEntryFormError> {
        form.validate()?;
        Ok(Self {
            entry_type: form.entry_type,
            jira_task_id: non_blank(form.jira_task_id),
            billing_package: non_blank(form.billing_package),
            category_id: form.category_id,
            category_kind,
            time: non_blank(form.time),
            date: form.date,
            end_date: form.end_date,
            description: non_blank(form.description),
        })
    }

    /// Day-based entries record a whole day and carry no time value.
    pub fn is_day_based(&self) -> bool {
        self.entry_type == EntryType::Category
            && self.category_kind.is_some_and(CategoryKind::is_day_based)
    }
}

/// A single check over a submission, returning the messages of its failures.
pub type SubmissionRule = fn(&TimeEntrySubmission) -> Vec<String>;

/// Rules every new time entry has to pass.
pub const DEFAULT_RULES: &[SubmissionRule] = &[
    target_selected,
    time_value_present,
    date_present,
    date_range_ordered,
];

/// Runs every rule and concatenates their messages. Empty means valid.
pub fn validate_submission(
    submission: &TimeEntrySubmission,
    rules: &[SubmissionRule],
) -> Vec<String> {
    rules.iter().flat_map(|rule| rule(submission)).collect()
}

/// Exactly one of a task or a category is chosen, matching the entry type.
pub fn target_selected(submission: &TimeEntrySubmission) -> Vec<String> {
    let has_task = submission.jira_task_id.is_some();
    let has_category = submission.category_id.is_some();

    if has_task && has_category {
        return vec!["Select either a JIRA task or a category, not both.".to_string()];
    }
    match submission.entry_type {
        EntryType::Jira if !has_task => vec!["Please select a JIRA task.".to_string()],
        EntryType::Category if !has_category => vec!["Please select a category.".to_string()],
        _ => Vec::new(),
    }
}

/// A parseable time value, unless the category is day-based.
pub fn time_value_present(submission: &TimeEntrySubmission) -> Vec<String> {
    if submission.is_day_based() {
        return Vec::new();
    }
    match submission.time.as_deref() {
        None => vec!["Please enter a time value, e.g. 2h30m.".to_string()],
        Some(time) => match parse_time_input(time) {
            Ok(_) => Vec::new(),
            Err(err) => vec![format!("Invalid time value: {err}.")],
        },
    }
}

pub fn date_present(submission: &TimeEntrySubmission) -> Vec<String> {
    if submission.date.is_none() {
        vec!["Please select a date.".to_string()]
    } else {
        Vec::new()
    }
}

pub fn date_range_ordered(submission: &TimeEntrySubmission) -> Vec<String> {
    match (submission.date, submission.end_date) {
        (Some(date), Some(end_date)) if end_date < date => {
            vec!["End date cannot be before the start date.".to_string()]
        }
        _ => Vec::new(),
    }
}

/// Validated new entry. Hours are as typed; rounding happens on persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTimeEntryFormPayload {
    pub target: EntryTarget,
    pub hours: Option<f64>,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl AddTimeEntryFormPayload {
    /// Builds the row to insert, rounding hours up to a quarter hour.
    pub fn into_new_time_entry(self) -> Result<NewTimeEntry, TypeConstraintError> {
        let now = Utc::now().naive_utc();
        Ok(NewTimeEntry {
            description: self.description,
            hours: self
                .hours
                .map(|hours| EntryHours::new(round_to_quarter_hour(hours)))
                .transpose()?,
            date: self.date,
            end_date: self.end_date,
            target: self.target,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Error)]
pub enum AddTimeEntryFormError {
    #[error("Add time entry form validation failed: {0}")]
    Validation(String),
    #[error("{}", .0.join(" "))]
    Rules(Vec<String>),
    #[error("Add time entry form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddTimeEntryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddTimeEntryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<TimeEntrySubmission> for AddTimeEntryFormPayload {
    type Error = AddTimeEntryFormError;

    fn try_from(value: TimeEntrySubmission) -> Result<Self, Self::Error> {
        let errors = validate_submission(&value, DEFAULT_RULES);
        if !errors.is_empty() {
            return Err(AddTimeEntryFormError::Rules(errors));
        }

        let day_based = value.is_day_based();
        let target = match (value.jira_task_id, value.category_id) {
            (Some(key), None) => EntryTarget::Task {
                key: TaskKey::new(key)?,
                billing_package: value.billing_package.map(BillingPackage::new).transpose()?,
            },
            (None, Some(category_id)) => EntryTarget::Category {
                category_id: CategoryId::new(category_id)?,
            },
            _ => {
                return Err(AddTimeEntryFormError::TypeConstraint(
                    "entry target is ambiguous".to_string(),
                ));
            }
        };

        let hours = if day_based {
            None
        } else {
            value
                .time
                .as_deref()
                .and_then(|time| parse_time_input(time).ok())
                .map(|parsed| parsed.hours)
        };
        let date = value.date.ok_or_else(|| {
            AddTimeEntryFormError::TypeConstraint("date is missing".to_string())
        })?;

        Ok(Self {
            target,
            hours,
            date,
            // Only whole-day entries span several dates.
            end_date: value.end_date.filter(|_| day_based),
            description: value.description,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTimeEntryForm {
    pub date: Option<NaiveDate>,
    /// New duration as typed, e.g. `1h15m`.
    pub time: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Validated partial update. Hours are as typed; rounding happens on persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTimeEntryFormPayload {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl UpdateTimeEntryFormPayload {
    /// Builds the changeset, rounding hours up to a quarter hour.
    pub fn into_update(self) -> Result<TimeEntryUpdate, TypeConstraintError> {
        Ok(TimeEntryUpdate {
            date: self.date,
            hours: self
                .hours
                .map(|hours| EntryHours::new(round_to_quarter_hour(hours)))
                .transpose()?,
            description: self.description,
        })
    }
}

#[derive(Debug, Error)]
pub enum UpdateTimeEntryFormError {
    #[error("Update time entry form validation failed: {0}")]
    Validation(String),
    #[error("Invalid time value: {0}")]
    Time(#[from] TimeInputError),
    #[error("Nothing to update")]
    Empty,
}

impl From<ValidationErrors> for UpdateTimeEntryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<UpdateTimeEntryForm> for UpdateTimeEntryFormPayload {
    type Error = UpdateTimeEntryFormError;

    fn try_from(value: UpdateTimeEntryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let hours = match non_blank(value.time) {
            Some(time) => Some(parse_time_input(&time)?.hours),
            None => None,
        };
        // A blank description clears the stored one.
        let payload = Self {
            date: value.date,
            hours,
            description: value.description.map(|d| non_blank(Some(d))),
        };
        if payload.date.is_none() && payload.hours.is_none() && payload.description.is_none() {
            return Err(UpdateTimeEntryFormError::Empty);
        }
        Ok(payload)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeleteTimeEntriesForm {
    #[validate(length(min = 1))]
    pub ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTimeEntriesFormPayload {
    pub ids: Vec<TimeEntryId>,
}

#[derive(Debug, Error)]
pub enum DeleteTimeEntriesFormError {
    #[error("Delete time entries form validation failed: {0}")]
    Validation(String),
    #[error("Delete time entries form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteTimeEntriesFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteTimeEntriesFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteTimeEntriesForm> for DeleteTimeEntriesFormPayload {
    type Error = DeleteTimeEntriesFormError;

    fn try_from(value: DeleteTimeEntriesForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let mut ids = value
            .ids
            .into_iter()
            .map(TimeEntryId::new)
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort();
        ids.dedup();
        Ok(Self { ids })
    }
}
