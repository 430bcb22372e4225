use chrono::Utc;
use diesel::prelude::*;

use crate::domain::time_entry::{NewTimeEntry, TimeEntry, TimeEntryUpdate};
use crate::domain::types::TimeEntryId;
use crate::models::time_entry::{
    NewTimeEntry as DbNewTimeEntry, TimeEntry as DbTimeEntry, TimeEntryChangeset,
};
use crate::repository::{
    DieselRepository, RepositoryResult, TimeEntryListQuery, TimeEntryReader, TimeEntryWriter,
};

impl TimeEntryReader for DieselRepository {
    fn list_time_entries(
        &self,
        query: TimeEntryListQuery,
    ) -> RepositoryResult<(usize, Vec<TimeEntry>)> {
        use crate::schema::time_entries;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = time_entries::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(from) = query.from {
                // Multi-day entries overlap the range when their end does.
                items = items.filter(
                    time_entries::date
                        .nullable()
                        .ge(from)
                        .or(time_entries::end_date.ge(from)),
                );
            }
            if let Some(to) = query.to {
                items = items.filter(time_entries::date.le(to));
            }
            if let Some(category_id) = query.category_id {
                items = items.filter(time_entries::category_id.eq(category_id.get()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let items = items
            .order((time_entries::date.asc(), time_entries::id.asc()))
            .load::<DbTimeEntry>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<TimeEntry>, _>>()?;

        Ok((total, items))
    }

    fn get_time_entry_by_id(&self, id: TimeEntryId) -> RepositoryResult<Option<TimeEntry>> {
        use crate::schema::time_entries;

        let mut conn = self.conn()?;

        let entry = time_entries::table
            .filter(time_entries::id.eq(id.get()))
            .first::<DbTimeEntry>(&mut conn)
            .optional()?;

        let entry = entry.map(TryInto::try_into).transpose()?;
        Ok(entry)
    }
}

impl TimeEntryWriter for DieselRepository {
    fn create_time_entry(&self, entry: &NewTimeEntry) -> RepositoryResult<TimeEntry> {
        use crate::schema::time_entries;

        let mut conn = self.conn()?;
        let db_entry = DbNewTimeEntry::from(entry);

        let created = diesel::insert_into(time_entries::table)
            .values(db_entry)
            .get_result::<DbTimeEntry>(&mut conn)?;

        Ok(TimeEntry::try_from(created)?)
    }

    fn update_time_entry(
        &self,
        id: TimeEntryId,
        update: &TimeEntryUpdate,
    ) -> RepositoryResult<usize> {
        use crate::schema::time_entries;

        let mut conn = self.conn()?;
        let changeset = TimeEntryChangeset::new(update, Utc::now().naive_utc());

        let affected = diesel::update(time_entries::table.filter(time_entries::id.eq(id.get())))
            .set(changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_time_entry(&self, id: TimeEntryId) -> RepositoryResult<usize> {
        use crate::schema::time_entries;

        let mut conn = self.conn()?;

        let affected = diesel::delete(time_entries::table.filter(time_entries::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_time_entries(&self, ids: &[TimeEntryId]) -> RepositoryResult<usize> {
        use crate::schema::time_entries;

        if ids.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();

        let affected =
            diesel::delete(time_entries::table.filter(time_entries::id.eq_any(raw_ids)))
                .execute(&mut conn)?;

        Ok(affected)
    }
}
