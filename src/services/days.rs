use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::domain::daily_work_time::DailyWorkTime;
use crate::domain::reconciliation::{DayStatus, logged_hours};
use crate::domain::time_entry::TimeEntry;
use crate::dto::days::DaySummaryDto;
use crate::repository::{DailyWorkTimeReader, TimeEntryListQuery, TimeEntryReader};

use super::{ServiceError, ServiceResult};

/// Longest range a single summary request may cover.
pub const MAX_SUMMARY_DAYS: i64 = 366;

/// Classifies every date of `from..=to` against the stored entries and
/// office time.
///
/// `today` decides which dates are still in the future.
pub fn show_day_summaries<R>(
    from: NaiveDate,
    to: NaiveDate,
    today: NaiveDate,
    repo: &R,
) -> ServiceResult<Vec<DaySummaryDto>>
where
    R: TimeEntryReader + DailyWorkTimeReader,
{
    if from > to {
        return Err(ServiceError::Form(
            "The start of the range is after its end".to_string(),
        ));
    }
    if (to - from).num_days() >= MAX_SUMMARY_DAYS {
        return Err(ServiceError::Form(format!(
            "At most {MAX_SUMMARY_DAYS} days can be summarised at once"
        )));
    }

    let entries = match repo.list_time_entries(TimeEntryListQuery::between(from, to)) {
        Ok((_total, entries)) => entries,
        Err(e) => {
            log::error!("Failed to list time entries: {e}");
            return Err(ServiceError::Internal);
        }
    };
    let work_times = match repo.list_daily_work_times(from, to) {
        Ok(work_times) => work_times,
        Err(e) => {
            log::error!("Failed to list office time: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(summarize_days(from, to, today, &entries, &work_times))
}

/// Inclusive range of the `days` dates ending on `today`.
///
/// `days` is clamped to `1..=MAX_SUMMARY_DAYS` so the range can always be
/// summarised.
pub fn trailing_range(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let days = i64::from(days).clamp(1, MAX_SUMMARY_DAYS);
    let from = u64::try_from(days - 1)
        .ok()
        .and_then(|back| today.checked_sub_days(Days::new(back)))
        .unwrap_or(today);
    (from, today)
}

/// Builds one summary per date; entries spanning several dates count for
/// each of them.
pub fn summarize_days(
    from: NaiveDate,
    to: NaiveDate,
    today: NaiveDate,
    entries: &[TimeEntry],
    work_times: &[DailyWorkTime],
) -> Vec<DaySummaryDto> {
    let office: HashMap<NaiveDate, f64> = work_times
        .iter()
        .map(|w| (w.date, w.total_hours.get()))
        .collect();

    from.iter_days()
        .take_while(|day| *day <= to)
        .map(|day| {
            let entry_hours: Vec<Option<f64>> = entries
                .iter()
                .filter(|e| e.covers(day))
                .map(|e| e.hours.map(f64::from))
                .collect();
            let office_hours = office.get(&day).copied();
            let status = DayStatus::classify(day, &entry_hours, office_hours, today);
            DaySummaryDto::new(
                day,
                status,
                entry_hours.len(),
                logged_hours(&entry_hours),
                office_hours,
            )
        })
        .collect()
}
