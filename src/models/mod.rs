//! Diesel row models and their conversions to domain types.

pub mod category;
pub mod config;
pub mod daily_work_time;
pub mod time_entry;
