use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::types::{CategoryId, TimeEntryId};
use crate::dto::time_entries::{TimeEntryDto, TimeEntryPageDto};
use crate::forms::time_entries::{
    AddTimeEntryForm, AddTimeEntryFormPayload, DeleteTimeEntriesFormPayload, EntryType,
    TimeEntrySubmission, UpdateTimeEntryFormPayload,
};
use crate::repository::{CategoryReader, TimeEntryListQuery, TimeEntryReader, TimeEntryWriter};

use super::{ServiceError, ServiceResult};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 50;

/// Query parameters accepted when listing time entries.
#[derive(Deserialize, Debug, Default)]
pub struct TimeEntriesQueryParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category_id: Option<i32>,
    pub page: Option<usize>,
}

/// Lists one page of entries overlapping the requested range.
pub fn show_time_entries<R>(params: TimeEntriesQueryParams, repo: &R) -> ServiceResult<TimeEntryPageDto>
where
    R: TimeEntryReader,
{
    if let (Some(from), Some(to)) = (params.from, params.to) {
        if from > to {
            return Err(ServiceError::Form(
                "The start of the range is after its end".to_string(),
            ));
        }
    }

    let mut query = TimeEntryListQuery {
        from: params.from,
        to: params.to,
        ..TimeEntryListQuery::default()
    };
    if let Some(category_id) = params.category_id {
        let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;
        query = query.category(category_id);
    }
    let page = params.page.unwrap_or(1);
    query = query.paginate(page, DEFAULT_ITEMS_PER_PAGE);

    match repo.list_time_entries(query) {
        Ok((total, entries)) => Ok(TimeEntryPageDto {
            total,
            items: entries.into_iter().map(TimeEntryDto::from).collect(),
        }),
        Err(e) => {
            log::error!("Failed to list time entries: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Validates and stores a new entry.
///
/// The selected category decides whether the entry is hourly or day-based,
/// so it is looked up before the entry rules run. Hours are rounded up to a
/// quarter hour on the way in.
pub fn add_time_entry<R>(form: AddTimeEntryForm, repo: &R) -> ServiceResult<TimeEntryDto>
where
    R: CategoryReader + TimeEntryWriter,
{
    let category_kind = match (form.entry_type, form.category_id) {
        (EntryType::Category, Some(category_id)) => {
            let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;
            match repo.get_category_by_id(category_id) {
                Ok(Some(category)) => Some(category.kind),
                Ok(None) => return Err(ServiceError::NotFound),
                Err(e) => {
                    log::error!("Failed to get category: {e}");
                    return Err(ServiceError::Internal);
                }
            }
        }
        _ => None,
    };

    let submission = TimeEntrySubmission::from_form(form, category_kind)?;
    let payload = AddTimeEntryFormPayload::try_from(submission)?;
    let new_entry = payload.into_new_time_entry()?;

    match repo.create_time_entry(&new_entry) {
        Ok(entry) => {
            log::info!("Created time entry {} on {}", entry.id, entry.date);
            Ok(TimeEntryDto::from(entry))
        }
        Err(e) => {
            log::error!("Failed to create time entry: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Applies a partial update to an entry.
///
/// Day-based entries carry no hours and cannot be given any. A new start
/// date must not move past the stored end date.
pub fn update_time_entry<R>(
    entry_id: i32,
    payload: UpdateTimeEntryFormPayload,
    repo: &R,
) -> ServiceResult<bool>
where
    R: TimeEntryReader + TimeEntryWriter,
{
    let entry_id = TimeEntryId::new(entry_id).map_err(|_| ServiceError::NotFound)?;

    let entry = match repo.get_time_entry_by_id(entry_id) {
        Ok(Some(entry)) => entry,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get time entry: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if payload.hours.is_some() && entry.hours.is_none() {
        return Err(ServiceError::Form(
            "Day-based entries do not record a time value".to_string(),
        ));
    }
    if let (Some(date), Some(end_date)) = (payload.date, entry.end_date) {
        if end_date < date {
            return Err(ServiceError::Form(
                "End date cannot be before the start date.".to_string(),
            ));
        }
    }

    let update = payload.into_update()?;
    if update.is_empty() {
        return Ok(false);
    }

    match repo.update_time_entry(entry_id, &update) {
        Ok(updated) => Ok(updated > 0),
        Err(e) => {
            log::error!("Failed to update time entry: {e}");
            Ok(false)
        }
    }
}

pub fn delete_time_entry<R>(entry_id: i32, repo: &R) -> ServiceResult<bool>
where
    R: TimeEntryReader + TimeEntryWriter,
{
    let entry_id = TimeEntryId::new(entry_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_time_entry_by_id(entry_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get time entry: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_time_entry(entry_id) {
        Ok(_) => {
            log::info!("Deleted time entry {entry_id}");
            Ok(true)
        }
        Err(e) => {
            log::error!("Failed to delete time entry: {e}");
            Ok(false)
        }
    }
}

/// Deletes the selected entries. Unknown ids are ignored.
///
/// Returns how many entries were removed.
pub fn delete_time_entries<R>(payload: DeleteTimeEntriesFormPayload, repo: &R) -> ServiceResult<usize>
where
    R: TimeEntryWriter,
{
    match repo.delete_time_entries(&payload.ids) {
        Ok(deleted) => {
            log::info!("Deleted {deleted} of {} time entries", payload.ids.len());
            Ok(deleted)
        }
        Err(e) => {
            log::error!("Failed to delete time entries: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::time_entry::{EntryTarget, TimeEntry};
    use crate::domain::types::{CategoryKind, CategoryName, EntryHours, TaskKey};
    use crate::forms::time_entries::UpdateTimeEntryForm;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn category(id: i32, name: &str, kind: CategoryKind) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            description: None,
            color: None,
            kind,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn task_entry(id: i32, day: u32, hours: f64) -> TimeEntry {
        TimeEntry {
            id: TimeEntryId::new(id).unwrap(),
            description: None,
            hours: Some(EntryHours::new(hours).unwrap()),
            date: date(day),
            end_date: None,
            target: EntryTarget::Task {
                key: TaskKey::new("PROJ-1").unwrap(),
                billing_package: None,
            },
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn vacation_entry(id: i32) -> TimeEntry {
        TimeEntry {
            hours: None,
            end_date: Some(date(4)),
            target: EntryTarget::Category {
                category_id: CategoryId::new(2).unwrap(),
            },
            ..task_entry(id, 2, 1.0)
        }
    }

    fn repo() -> TestRepository {
        TestRepository::new(
            vec![
                category(1, "Meetings", CategoryKind::Time),
                category(2, "Vacation", CategoryKind::Day),
            ],
            vec![task_entry(1, 2, 2.0), vacation_entry(2), task_entry(3, 10, 1.0)],
        )
    }

    fn category_form(category_id: i32, time: Option<&str>) -> AddTimeEntryForm {
        AddTimeEntryForm {
            entry_type: EntryType::Category,
            jira_task_id: None,
            billing_package: None,
            category_id: Some(category_id),
            time: time.map(str::to_string),
            date: Some(date(5)),
            end_date: Some(date(6)),
            description: None,
        }
    }

    #[test]
    fn lists_entries_overlapping_the_range() {
        let page = show_time_entries(
            TimeEntriesQueryParams {
                from: Some(date(3)),
                to: Some(date(5)),
                ..TimeEntriesQueryParams::default()
            },
            &repo(),
        )
        .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, 2);
    }

    #[test]
    fn rejects_reversed_range() {
        let err = show_time_entries(
            TimeEntriesQueryParams {
                from: Some(date(5)),
                to: Some(date(3)),
                ..TimeEntriesQueryParams::default()
            },
            &repo(),
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
    }

    #[test]
    fn adds_hourly_entry_rounded_up() {
        let repo = repo();
        let entry = add_time_entry(category_form(1, Some("1h10m")), &repo).unwrap();

        assert_eq!(entry.hours, Some(1.25));
        assert_eq!(entry.hours_display.as_deref(), Some("1h15m"));
        assert_eq!(entry.end_date, None);
        assert_eq!(repo.entries().len(), 4);
    }

    #[test]
    fn adds_day_based_entry_without_hours() {
        let repo = repo();
        let entry = add_time_entry(category_form(2, None), &repo).unwrap();

        assert_eq!(entry.hours, None);
        assert_eq!(entry.end_date, Some(date(6)));
    }

    #[test]
    fn hourly_category_requires_time() {
        let err = add_time_entry(category_form(1, None), &repo()).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation(vec!["Please enter a time value, e.g. 2h30m.".to_string()])
        );
    }

    #[test]
    fn unknown_category_is_not_found() {
        let err = add_time_entry(category_form(9, Some("1h")), &repo()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn updates_hours_of_hourly_entry() {
        let repo = repo();
        let payload: UpdateTimeEntryFormPayload = UpdateTimeEntryForm {
            date: None,
            time: Some("3h5m".to_string()),
            description: Some("Planning".to_string()),
        }
        .try_into()
        .unwrap();

        assert!(update_time_entry(1, payload, &repo).unwrap());
        let entry = repo
            .entries()
            .into_iter()
            .find(|e| e.id == 1)
            .unwrap();
        assert_eq!(entry.hours.unwrap().get(), 3.25);
        assert_eq!(entry.description.as_deref(), Some("Planning"));
        assert_eq!(entry.date, date(2));
    }

    #[test]
    fn day_based_entry_rejects_hours() {
        let payload: UpdateTimeEntryFormPayload = UpdateTimeEntryForm {
            date: None,
            time: Some("1h".to_string()),
            description: None,
        }
        .try_into()
        .unwrap();

        let err = update_time_entry(2, payload, &repo()).unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
    }

    #[test]
    fn update_cannot_move_start_past_end_date() {
        let repo = repo();
        let payload: UpdateTimeEntryFormPayload = UpdateTimeEntryForm {
            date: Some(date(10)),
            time: None,
            description: None,
        }
        .try_into()
        .unwrap();

        let err = update_time_entry(2, payload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
        let entry = repo.entries().into_iter().find(|e| e.id == 2).unwrap();
        assert_eq!(entry.date, date(2));
        assert_eq!(entry.end_date, Some(date(4)));
    }

    #[test]
    fn update_may_move_start_within_the_range() {
        let repo = repo();
        let payload: UpdateTimeEntryFormPayload = UpdateTimeEntryForm {
            date: Some(date(4)),
            time: None,
            description: None,
        }
        .try_into()
        .unwrap();

        assert!(update_time_entry(2, payload, &repo).unwrap());
        let entry = repo.entries().into_iter().find(|e| e.id == 2).unwrap();
        assert_eq!(entry.date, date(4));
    }

    #[test]
    fn blank_description_clears_the_stored_one() {
        let repo = repo();
        let payload: UpdateTimeEntryFormPayload = UpdateTimeEntryForm {
            date: None,
            time: None,
            description: Some("Standup".to_string()),
        }
        .try_into()
        .unwrap();
        assert!(update_time_entry(1, payload, &repo).unwrap());

        let payload: UpdateTimeEntryFormPayload = UpdateTimeEntryForm {
            date: None,
            time: None,
            description: Some("   ".to_string()),
        }
        .try_into()
        .unwrap();
        assert!(update_time_entry(1, payload, &repo).unwrap());

        let entry = repo.entries().into_iter().find(|e| e.id == 1).unwrap();
        assert_eq!(entry.description, None);
    }

    #[test]
    fn huge_page_numbers_return_an_empty_page() {
        let page = show_time_entries(
            TimeEntriesQueryParams {
                page: Some(usize::MAX),
                ..TimeEntriesQueryParams::default()
            },
            &repo(),
        )
        .unwrap();

        assert_eq!(page.total, 3);
        assert!(page.items.is_empty());
    }

    #[test]
    fn deleting_missing_entry_is_not_found() {
        assert_eq!(
            delete_time_entry(42, &repo()).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn bulk_delete_ignores_unknown_ids() {
        let repo = repo();
        let payload = DeleteTimeEntriesFormPayload {
            ids: vec![TimeEntryId::new(1).unwrap(), TimeEntryId::new(99).unwrap()],
        };

        assert_eq!(delete_time_entries(payload, &repo).unwrap(), 1);
        assert_eq!(repo.entries().len(), 2);
    }
}
