//! Error conversion glue between layers.
//!
//! The domain layer does not depend on service or repository error types;
//! the conversions live here instead.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::{AddCategoryFormError, DeleteCategoryFormError};
use crate::forms::daily_work_time::UpsertDailyWorkTimeFormError;
use crate::forms::time_entries::{
    AddTimeEntryFormError, DeleteTimeEntriesFormError, UpdateTimeEntryFormError,
};
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<AddTimeEntryFormError> for ServiceError {
    fn from(val: AddTimeEntryFormError) -> Self {
        match val {
            AddTimeEntryFormError::Rules(messages) => ServiceError::Validation(messages),
            other => ServiceError::Form(other.to_string()),
        }
    }
}

/// Implements `From<$form_error> for ServiceError` as a plain form failure.
macro_rules! form_error_into_service_error {
    ($($form_error:ty),+ $(,)?) => {
        $(
            impl From<$form_error> for ServiceError {
                fn from(val: $form_error) -> Self {
                    ServiceError::Form(val.to_string())
                }
            }
        )+
    };
}

form_error_into_service_error!(
    AddCategoryFormError,
    DeleteCategoryFormError,
    UpdateTimeEntryFormError,
    DeleteTimeEntriesFormError,
    UpsertDailyWorkTimeFormError,
);
