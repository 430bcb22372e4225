pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod daily_work_time;
pub mod days;
pub mod errors;
pub mod time_entries;
