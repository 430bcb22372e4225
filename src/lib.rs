//! Core library exports for the timesheet service.
//!
//! This crate exposes the time calculations, day reconciliation, forms,
//! repositories and service layers used to track working time against
//! tasks, categories and recorded office time.

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
