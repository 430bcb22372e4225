use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryColor, CategoryId, CategoryKind, CategoryName};

/// Internal activity type that time entries can be booked against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
    pub color: Option<CategoryColor>,
    pub kind: CategoryKind,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<String>,
    pub color: Option<CategoryColor>,
    pub kind: CategoryKind,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
