use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::daily_work_time::{DailyWorkTime, NewDailyWorkTime};
use crate::domain::time_entry::{NewTimeEntry, TimeEntry, TimeEntryUpdate};
use crate::domain::types::{CategoryId, CategoryName, TimeEntryId};

pub mod category;
pub mod daily_work_time;
pub mod errors;
pub mod time_entry;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Page selection for list queries. Pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Rows to skip. Pages past the addressable range saturate.
    pub fn offset(&self) -> i64 {
        let skipped = (self.page.max(1) - 1).saturating_mul(self.per_page);
        i64::try_from(skipped).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// Query parameters used when listing time entries.
///
/// An entry matches a date range when any day it covers (`date` up to
/// `end_date`) falls inside the inclusive range.
#[derive(Debug, Clone, Default)]
pub struct TimeEntryListQuery {
    /// First day of the range.
    pub from: Option<NaiveDate>,
    /// Last day of the range.
    pub to: Option<NaiveDate>,
    /// Restrict to entries booked against a category.
    pub category_id: Option<CategoryId>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl TimeEntryListQuery {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// In-memory version of the range filter applied by the database.
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        if self.from.is_some_and(|from| entry.last_date() < from) {
            return false;
        }
        if self.to.is_some_and(|to| entry.date > to) {
            return false;
        }
        match self.category_id {
            Some(category_id) => entry.target.category_id() == Some(category_id),
            None => true,
        }
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve a category by its unique name.
    fn get_category_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize>;
    /// Delete a category together with the entries booked against it.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for time entries.
pub trait TimeEntryReader {
    /// List entries matching the query, returning the total count and the page.
    fn list_time_entries(
        &self,
        query: TimeEntryListQuery,
    ) -> RepositoryResult<(usize, Vec<TimeEntry>)>;
    /// Retrieve an entry by its identifier.
    fn get_time_entry_by_id(&self, id: TimeEntryId) -> RepositoryResult<Option<TimeEntry>>;
}

/// Write operations for time entries.
pub trait TimeEntryWriter {
    /// Persist a new entry and return it with its identifier.
    fn create_time_entry(&self, entry: &NewTimeEntry) -> RepositoryResult<TimeEntry>;
    /// Apply a partial update.
    fn update_time_entry(&self, id: TimeEntryId, update: &TimeEntryUpdate)
    -> RepositoryResult<usize>;
    /// Delete a single entry.
    fn delete_time_entry(&self, id: TimeEntryId) -> RepositoryResult<usize>;
    /// Delete several entries at once.
    fn delete_time_entries(&self, ids: &[TimeEntryId]) -> RepositoryResult<usize>;
}

/// Read-only operations for office time records.
pub trait DailyWorkTimeReader {
    /// Office time recorded for `date`, if any.
    fn get_daily_work_time(&self, date: NaiveDate) -> RepositoryResult<Option<DailyWorkTime>>;
    /// Office time records inside the inclusive range, ordered by date.
    fn list_daily_work_times(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<DailyWorkTime>>;
}

/// Write operations for office time records.
pub trait DailyWorkTimeWriter {
    /// Create the record for the date or replace its total.
    fn upsert_daily_work_time(
        &self,
        work_time: &NewDailyWorkTime,
    ) -> RepositoryResult<DailyWorkTime>;
}
