use chrono::NaiveDate;

use crate::dto::days::DailyWorkTimeDto;
use crate::forms::daily_work_time::UpsertDailyWorkTimeFormPayload;
use crate::repository::{DailyWorkTimeReader, DailyWorkTimeWriter};

use super::{ServiceError, ServiceResult};

/// Records the office time of a date, replacing any earlier value.
pub fn upsert_daily_work_time<R>(
    payload: UpsertDailyWorkTimeFormPayload,
    repo: &R,
) -> ServiceResult<DailyWorkTimeDto>
where
    R: DailyWorkTimeWriter,
{
    let work_time = payload.into_new_daily_work_time();
    match repo.upsert_daily_work_time(&work_time) {
        Ok(stored) => {
            log::info!(
                "Office time for {} set to {}h",
                stored.date,
                stored.total_hours.get()
            );
            Ok(DailyWorkTimeDto::from(stored))
        }
        Err(e) => {
            log::error!("Failed to save office time: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_daily_work_time<R>(date: NaiveDate, repo: &R) -> ServiceResult<Option<DailyWorkTimeDto>>
where
    R: DailyWorkTimeReader,
{
    match repo.get_daily_work_time(date) {
        Ok(work_time) => Ok(work_time.map(DailyWorkTimeDto::from)),
        Err(e) => {
            log::error!("Failed to get office time: {e}");
            Err(ServiceError::Internal)
        }
    }
}
