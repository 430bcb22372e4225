use chrono::NaiveDate;
use pushkind_timesheet::domain::reconciliation::DayStatus;
use pushkind_timesheet::domain::types::CategoryKind;
use pushkind_timesheet::forms::daily_work_time::{
    UpsertDailyWorkTimeForm, UpsertDailyWorkTimeFormPayload,
};
use pushkind_timesheet::forms::time_entries::{
    AddTimeEntryForm, EntryType, UpdateTimeEntryForm, UpdateTimeEntryFormPayload,
};
use pushkind_timesheet::models::config::SeedCategory;
use pushkind_timesheet::repository::DieselRepository;
use pushkind_timesheet::services::ServiceError;
use pushkind_timesheet::services::categories::{seed_categories, show_categories};
use pushkind_timesheet::services::daily_work_time::upsert_daily_work_time;
use pushkind_timesheet::services::days::show_day_summaries;
use pushkind_timesheet::services::time_entries::{
    TimeEntriesQueryParams, add_time_entry, show_time_entries, update_time_entry,
};

mod common;

// 2025-06-02 is a Monday.
fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).expect("valid date")
}

fn seed(name: &str, kind: CategoryKind) -> SeedCategory {
    SeedCategory {
        name: name.to_string(),
        kind,
        description: None,
        color: None,
    }
}

fn seeded_repo(test_db: &common::TestDb) -> (DieselRepository, i32, i32) {
    let repo = DieselRepository::new(test_db.pool());
    seed_categories(
        vec![
            seed("Meetings", CategoryKind::Time),
            seed("Vacation", CategoryKind::Day),
        ],
        &repo,
    )
    .expect("should seed categories");

    let categories = show_categories(&repo).expect("should list categories");
    let id_of = |name: &str| {
        categories
            .iter()
            .find(|c| c.name == name)
            .expect("seeded category should exist")
            .id
    };
    let meetings = id_of("Meetings");
    let vacation = id_of("Vacation");
    (repo, meetings, vacation)
}

fn jira_form(time: &str, day: u32) -> AddTimeEntryForm {
    AddTimeEntryForm {
        entry_type: EntryType::Jira,
        jira_task_id: Some("PROJ-7".to_string()),
        billing_package: Some("Support".to_string()),
        category_id: None,
        time: Some(time.to_string()),
        date: Some(date(day)),
        end_date: None,
        description: Some("Customer call".to_string()),
    }
}

fn office(day: u32, hours: f64) -> UpsertDailyWorkTimeFormPayload {
    UpsertDailyWorkTimeForm {
        date: date(day),
        total_hours: hours,
    }
    .try_into()
    .expect("valid office time form")
}

#[test]
fn test_seeding_twice_creates_categories_once() {
    let test_db = common::TestDb::new();
    let (repo, _, _) = seeded_repo(&test_db);

    let created = seed_categories(vec![seed("Meetings", CategoryKind::Time)], &repo)
        .expect("should seed categories");
    assert_eq!(created, 0);
    assert_eq!(show_categories(&repo).expect("should list").len(), 2);
}

#[test]
fn test_added_entries_are_stored_rounded_up() {
    let test_db = common::TestDb::new();
    let (repo, _, _) = seeded_repo(&test_db);

    let entry = add_time_entry(jira_form("2h5m", 2), &repo).expect("should add entry");
    assert_eq!(entry.hours, Some(2.25));
    assert_eq!(entry.hours_display.as_deref(), Some("2h15m"));
    assert_eq!(entry.jira_task_id.as_deref(), Some("PROJ-7"));
    assert_eq!(entry.billing_package.as_deref(), Some("Support"));
}

#[test]
fn test_rule_failures_are_reported_together() {
    let test_db = common::TestDb::new();
    let (repo, _, _) = seeded_repo(&test_db);

    let form = AddTimeEntryForm {
        jira_task_id: None,
        date: None,
        ..jira_form("1h", 2)
    };
    let err = add_time_entry(form, &repo).expect_err("should reject entry");
    assert_eq!(
        err,
        ServiceError::Validation(vec![
            "Please select a JIRA task.".to_string(),
            "Please select a date.".to_string(),
        ])
    );
}

#[test]
fn test_week_is_reconciled_against_office_time() {
    let test_db = common::TestDb::new();
    let (repo, meetings, vacation) = seeded_repo(&test_db);

    add_time_entry(jira_form("4h", 2), &repo).expect("should add entry");
    add_time_entry(
        AddTimeEntryForm {
            entry_type: EntryType::Category,
            jira_task_id: None,
            billing_package: None,
            category_id: Some(meetings),
            time: Some("4h10m".to_string()),
            date: Some(date(2)),
            end_date: None,
            description: None,
        },
        &repo,
    )
    .expect("should add entry");
    add_time_entry(jira_form("3h", 3), &repo).expect("should add entry");
    add_time_entry(
        AddTimeEntryForm {
            entry_type: EntryType::Category,
            jira_task_id: None,
            billing_package: None,
            category_id: Some(vacation),
            time: None,
            date: Some(date(4)),
            end_date: Some(date(5)),
            description: None,
        },
        &repo,
    )
    .expect("should add entry");

    upsert_daily_work_time(office(2, 8.0), &repo).expect("should save office time");
    upsert_daily_work_time(office(3, 8.0), &repo).expect("should save office time");

    let summaries =
        show_day_summaries(date(2), date(8), date(6), &repo).expect("should summarise days");
    let statuses: Vec<DayStatus> = summaries.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            DayStatus::Complete,
            DayStatus::Mismatch,
            DayStatus::NoOfficeTime,
            DayStatus::NoOfficeTime,
            DayStatus::Missing,
            DayStatus::Weekend,
            DayStatus::Weekend,
        ]
    );
    assert_eq!(summaries[0].logged_display, "8h15m");

    let json = serde_json::to_value(&summaries[1]).expect("summary should serialize");
    assert_eq!(json["status"], "mismatch");
    assert_eq!(json["date"], "2025-06-03");
    assert_eq!(json["logged_hours"], 3.0);

    let json = serde_json::to_value(&summaries[2]).expect("summary should serialize");
    assert_eq!(json["status"], "no-office-time");
    assert!(json["office_hours"].is_null());
}

#[test]
fn test_update_keeps_multi_day_range_ordered() {
    let test_db = common::TestDb::new();
    let (repo, _, vacation) = seeded_repo(&test_db);

    let entry = add_time_entry(
        AddTimeEntryForm {
            entry_type: EntryType::Category,
            jira_task_id: None,
            billing_package: None,
            category_id: Some(vacation),
            time: None,
            date: Some(date(2)),
            end_date: Some(date(4)),
            description: None,
        },
        &repo,
    )
    .expect("should add entry");

    let payload: UpdateTimeEntryFormPayload = UpdateTimeEntryForm {
        date: Some(date(10)),
        time: None,
        description: None,
    }
    .try_into()
    .expect("valid update form");
    let err = update_time_entry(entry.id, payload, &repo).expect_err("should reject update");
    assert!(matches!(err, ServiceError::Form(_)));

    let page = show_time_entries(TimeEntriesQueryParams::default(), &repo)
        .expect("should list entries");
    assert_eq!(page.items[0].date, date(2));
    assert_eq!(page.items[0].end_date, Some(date(4)));
}

#[test]
fn test_huge_page_number_returns_empty_page() {
    let test_db = common::TestDb::new();
    let (repo, _, _) = seeded_repo(&test_db);
    add_time_entry(jira_form("1h", 2), &repo).expect("should add entry");

    let page = show_time_entries(
        TimeEntriesQueryParams {
            page: Some(usize::MAX),
            ..TimeEntriesQueryParams::default()
        },
        &repo,
    )
    .expect("should list entries");
    assert_eq!(page.total, 1);
    assert!(page.items.is_empty());
}
