use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{DailyWorkTimeId, OfficeHours};

/// Office time recorded for one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWorkTime {
    pub id: DailyWorkTimeId,
    pub date: NaiveDate,
    pub total_hours: OfficeHours,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data for creating or replacing the office time of a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDailyWorkTime {
    pub date: NaiveDate,
    pub total_hours: OfficeHours,
    pub updated_at: NaiveDateTime,
}
