use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::daily_work_time::{
    DailyWorkTime as DomainDailyWorkTime, NewDailyWorkTime as DomainNewDailyWorkTime,
};
use crate::domain::types::{OfficeHours, TypeConstraintError};

/// Diesel model representing a row in the `daily_work_times` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::daily_work_times)]
pub struct DailyWorkTime {
    pub id: i32,
    pub date: NaiveDate,
    pub total_hours: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable/patchable form of [`DailyWorkTime`] used by the upsert.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::daily_work_times)]
pub struct NewDailyWorkTime {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<DailyWorkTime> for DomainDailyWorkTime {
    type Error = TypeConstraintError;

    fn try_from(work_time: DailyWorkTime) -> Result<Self, Self::Error> {
        Ok(Self {
            id: work_time.id.try_into()?,
            date: work_time.date,
            total_hours: OfficeHours::new(work_time.total_hours)?,
            created_at: work_time.created_at,
            updated_at: work_time.updated_at,
        })
    }
}

impl From<&DomainNewDailyWorkTime> for NewDailyWorkTime {
    fn from(work_time: &DomainNewDailyWorkTime) -> Self {
        Self {
            date: work_time.date,
            total_hours: work_time.total_hours.get(),
            updated_at: work_time.updated_at,
        }
    }
}
