use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{
    CategoryColor, CategoryId, CategoryKind, CategoryName, TypeConstraintError,
};
use crate::models::config::SeedCategory;

#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(length(max = 32))]
    pub color: Option<String>,
    /// `time` or `day`; defaults to `time`.
    pub kind: Option<String>,
}

impl From<SeedCategory> for AddCategoryForm {
    fn from(seed: SeedCategory) -> Self {
        Self {
            name: seed.name,
            description: seed.description,
            color: seed.color,
            kind: Some(seed.kind.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
    pub description: Option<String>,
    pub color: Option<CategoryColor>,
    pub kind: CategoryKind,
}

impl AddCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        let now = Utc::now().naive_utc();
        NewCategory {
            name: self.name,
            description: self.description,
            color: self.color,
            kind: self.kind,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddCategoryFormError {
    #[error("Add category form validation failed: {0}")]
    Validation(String),
    #[error("Add category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = AddCategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let kind = match non_blank(value.kind) {
            Some(kind) => CategoryKind::try_from(kind)?,
            None => CategoryKind::default(),
        };

        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: non_blank(value.description),
            color: non_blank(value.color).map(CategoryColor::new).transpose()?,
            kind,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeleteCategoryForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCategoryFormPayload {
    pub category_id: CategoryId,
}

#[derive(Debug, Error)]
pub enum DeleteCategoryFormError {
    #[error("Delete category form validation failed: {0}")]
    Validation(String),
    #[error("Delete category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteCategoryForm> for DeleteCategoryFormPayload {
    type Error = DeleteCategoryFormError;

    fn try_from(value: DeleteCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_category_defaults_to_time_kind() {
        let form = AddCategoryForm {
            name: " Meetings ".to_string(),
            description: Some("   ".to_string()),
            color: None,
            kind: None,
        };

        let payload: AddCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Meetings");
        assert_eq!(payload.kind, CategoryKind::Time);
        assert_eq!(payload.description, None);
    }

    #[test]
    fn add_category_accepts_day_kind_and_color() {
        let form = AddCategoryForm {
            name: "Vacation".to_string(),
            description: None,
            color: Some("#22c55e".to_string()),
            kind: Some("day".to_string()),
        };

        let payload: AddCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.kind, CategoryKind::Day);
        assert_eq!(payload.color.unwrap().as_str(), "#22c55e");
    }

    #[test]
    fn add_category_rejects_unknown_kind() {
        let form = AddCategoryForm {
            name: "Vacation".to_string(),
            description: None,
            color: None,
            kind: Some("week".to_string()),
        };

        let result: Result<AddCategoryFormPayload, _> = form.try_into();
        assert!(matches!(result, Err(AddCategoryFormError::TypeConstraint(_))));
    }

    #[test]
    fn add_category_rejects_empty_name() {
        let form = AddCategoryForm {
            name: String::new(),
            description: None,
            color: None,
            kind: None,
        };

        let result: Result<AddCategoryFormPayload, _> = form.try_into();
        assert!(matches!(result, Err(AddCategoryFormError::Validation(_))));
    }

    #[test]
    fn delete_category_form_validates_id() {
        let result: Result<DeleteCategoryFormPayload, _> =
            DeleteCategoryForm { category_id: 0 }.try_into();
        assert!(result.is_err());
    }
}
