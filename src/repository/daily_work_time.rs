use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::daily_work_time::{DailyWorkTime, NewDailyWorkTime};
use crate::models::daily_work_time::{
    DailyWorkTime as DbDailyWorkTime, NewDailyWorkTime as DbNewDailyWorkTime,
};
use crate::repository::{
    DailyWorkTimeReader, DailyWorkTimeWriter, DieselRepository, RepositoryResult,
};

impl DailyWorkTimeReader for DieselRepository {
    fn get_daily_work_time(&self, date: NaiveDate) -> RepositoryResult<Option<DailyWorkTime>> {
        use crate::schema::daily_work_times;

        let mut conn = self.conn()?;

        let work_time = daily_work_times::table
            .filter(daily_work_times::date.eq(date))
            .first::<DbDailyWorkTime>(&mut conn)
            .optional()?;

        let work_time = work_time.map(TryInto::try_into).transpose()?;
        Ok(work_time)
    }

    fn list_daily_work_times(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<DailyWorkTime>> {
        use crate::schema::daily_work_times;

        let mut conn = self.conn()?;

        let items = daily_work_times::table
            .filter(daily_work_times::date.between(from, to))
            .order(daily_work_times::date.asc())
            .load::<DbDailyWorkTime>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<DailyWorkTime>, _>>()?;

        Ok(items)
    }
}

impl DailyWorkTimeWriter for DieselRepository {
    fn upsert_daily_work_time(
        &self,
        work_time: &NewDailyWorkTime,
    ) -> RepositoryResult<DailyWorkTime> {
        use crate::schema::daily_work_times;

        let mut conn = self.conn()?;
        let db_work_time = DbNewDailyWorkTime::from(work_time);

        let stored = diesel::insert_into(daily_work_times::table)
            .values(&db_work_time)
            .on_conflict(daily_work_times::date)
            .do_update()
            .set(&db_work_time)
            .get_result::<DbDailyWorkTime>(&mut conn)?;

        Ok(DailyWorkTime::try_from(stored)?)
    }
}
