pub mod categories;
pub mod daily_work_time;
pub mod time_entries;
