//! CLI subcommands.

pub mod migrate;
pub mod report;
pub mod seed;

use export_tracker_admin::config::TrackerConfig;
use export_tracker_admin::db;
use sqlx::PgPool;

/// Connect to the configured database.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the connection fails.
pub async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let config = TrackerConfig::from_env()?;
    let url = config
        .database_url()
        .ok_or("TRACKER_DATABASE_URL (or DATABASE_URL) not set")?;
    tracing::info!("Connecting to database...");
    Ok(db::create_pool(url).await?)
}
