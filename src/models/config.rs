use serde::Deserialize;

use crate::domain::types::CategoryKind;

fn default_report_days() -> u32 {
    7
}

/// Configuration options of the timesheet admin binary.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// How many days back (today included) the startup report covers.
    #[serde(default = "default_report_days")]
    pub report_days: u32,
    /// Categories created on startup when missing.
    #[serde(default)]
    pub seed_categories: Vec<SeedCategory>,
}

/// Category definition used to seed an empty database.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    #[serde(default)]
    pub kind: CategoryKind,
    pub description: Option<String>,
    pub color: Option<String>,
}
