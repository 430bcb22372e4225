//! Domain entities, value types and the pure time calculations.

pub mod category;
pub mod daily_work_time;
pub mod hours;
pub mod reconciliation;
pub mod time_entry;
pub mod types;
