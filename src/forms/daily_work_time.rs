use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::daily_work_time::NewDailyWorkTime;
use crate::domain::types::{OfficeHours, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertDailyWorkTimeForm {
    pub date: NaiveDate,
    #[validate(range(min = 0.0, max = 24.0))]
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpsertDailyWorkTimeFormPayload {
    pub date: NaiveDate,
    pub total_hours: OfficeHours,
}

impl UpsertDailyWorkTimeFormPayload {
    pub fn into_new_daily_work_time(self) -> NewDailyWorkTime {
        NewDailyWorkTime {
            date: self.date,
            total_hours: self.total_hours,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum UpsertDailyWorkTimeFormError {
    #[error("Office time form validation failed: {0}")]
    Validation(String),
    #[error("Office time form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpsertDailyWorkTimeFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpsertDailyWorkTimeFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpsertDailyWorkTimeForm> for UpsertDailyWorkTimeFormPayload {
    type Error = UpsertDailyWorkTimeFormError;

    fn try_from(value: UpsertDailyWorkTimeForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            date: value.date,
            total_hours: OfficeHours::new(value.total_hours)?,
        })
    }
}
