//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, names and hour values are checked once, at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be positive was zero/negative or not finite.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A numeric value required to be non-negative was negative or not finite.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Generates a newtype for positive database identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Generates a trimmed, non-empty text newtype.
macro_rules! text_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);
id_newtype!(
    TimeEntryId,
    "Unique identifier for a time entry.",
    "time_entry_id"
);
id_newtype!(
    DailyWorkTimeId,
    "Unique identifier for a daily work time record.",
    "daily_work_time_id"
);

text_newtype!(
    CategoryName,
    "Category name enforcing non-empty values.",
    "category name"
);
text_newtype!(
    CategoryColor,
    "Display color of a category (any CSS color token).",
    "category color"
);
text_newtype!(
    TaskKey,
    "External issue-tracker task key, e.g. `PROJ-123`.",
    "task key"
);
text_newtype!(
    BillingPackage,
    "Billing package a task entry is booked against.",
    "billing package"
);

/// Strictly positive number of decimal hours logged by a time-based entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct EntryHours(f64);

impl EntryHours {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveNumber("hours"))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for EntryHours {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntryHours> for f64 {
    fn from(value: EntryHours) -> Self {
        value.0
    }
}

/// Office (attendance) time for a single date, zero or greater.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct OfficeHours(f64);

impl OfficeHours {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("total hours"))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for OfficeHours {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OfficeHours> for f64 {
    fn from(value: OfficeHours) -> Self {
        value.0
    }
}

/// How entries booked against a category are measured.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Hourly entries carrying a time value.
    #[default]
    Time,
    /// Full-day entries (vacation, sick leave) without hours.
    Day,
}

impl CategoryKind {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Day => "day",
        }
    }

    pub const fn is_day_based(self) -> bool {
        matches!(self, Self::Day)
    }
}

impl Display for CategoryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CategoryKind {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "time" => Ok(Self::Time),
            "day" => Ok(Self::Day),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "category kind: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for CategoryKind {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<CategoryKind> for String {
    fn from(value: CategoryKind) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text_values() {
        let value = CategoryName::new("  Meetings  ").unwrap();
        assert_eq!(value.as_str(), "Meetings");
    }

    #[test]
    fn rejects_blank_task_keys() {
        assert_eq!(
            TaskKey::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("task key")
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = TimeEntryId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("time_entry_id"));
    }

    #[test]
    fn entry_hours_must_be_positive() {
        assert!(EntryHours::new(0.25).is_ok());
        assert_eq!(
            EntryHours::new(0.0).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("hours")
        );
        assert!(EntryHours::new(f64::NAN).is_err());
    }

    #[test]
    fn office_hours_allow_zero() {
        assert_eq!(OfficeHours::new(0.0).unwrap().get(), 0.0);
        assert!(OfficeHours::new(-1.0).is_err());
    }

    #[test]
    fn category_kind_round_trips_through_strings() {
        assert_eq!(CategoryKind::try_from("day").unwrap(), CategoryKind::Day);
        assert_eq!(String::from(CategoryKind::Time), "time");
        assert!(CategoryKind::try_from("week").is_err());
    }
}
