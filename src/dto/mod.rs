//! Flat, display-ready views of domain entities.

pub mod categories;
pub mod days;
pub mod time_entries;
