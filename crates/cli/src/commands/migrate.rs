//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! et-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `TRACKER_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Migrations live in `crates/admin/migrations/` and create the `tracker`
//! schema.

/// Run the tracker database migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    tracing::info!("Running tracker migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Tracker migrations complete!");
    Ok(())
}
