use std::env;
use std::process::ExitCode;

use chrono::Local;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_timesheet::db::establish_connection_pool;
use pushkind_timesheet::models::config::AppConfig;
use pushkind_timesheet::repository::DieselRepository;
use pushkind_timesheet::services::categories::seed_categories;
use pushkind_timesheet::services::days::{show_day_summaries, trailing_range};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn load_config() -> Result<AppConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}

fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app_config = load_config()?;

    let pool = establish_connection_pool(&app_config.database_url)?;
    {
        let mut conn = pool.get()?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;
        if !applied.is_empty() {
            log::info!("Applied {} migrations", applied.len());
        }
    }

    let repo = DieselRepository::new(pool);

    let seeded = seed_categories(app_config.seed_categories, &repo)?;
    log::info!("Seeded {seeded} categories");

    let today = Local::now().date_naive();
    let (from, to) = trailing_range(today, app_config.report_days);

    for day in show_day_summaries(from, to, today, &repo)? {
        if day.status.needs_attention() {
            log::warn!(
                "{} {}: logged {}, office {}",
                day.date,
                day.status,
                day.logged_display,
                day.office_display.as_deref().unwrap_or("-")
            );
        } else {
            log::info!("{} {}", day.date, day.status);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
