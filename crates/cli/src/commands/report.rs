//! Generate a catalogue report as CSV.
//!
//! Reads from the configured database, or from the demo fixtures (laid out
//! around the report date) when none is configured.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing::info;

use export_tracker_admin::config::TrackerConfig;
use export_tracker_admin::db::{self, DataSource, DemoStore};
use export_tracker_admin::export::{file_name, to_csv};
use export_tracker_core::reports::{ReportKind, build};

/// Build report `slug` as of `date` (default: today) and write it to `output`.
///
/// # Errors
///
/// Returns an error for an unknown slug, an empty report, or a database or
/// file failure.
pub async fn run(
    slug: &str,
    output: Option<PathBuf>,
    date: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind: ReportKind = slug.parse().map_err(|e| {
        let known: Vec<&str> = ReportKind::ALL.iter().map(|k| k.slug()).collect();
        format!("{e} (available: {})", known.join(", "))
    })?;
    let today = date.unwrap_or_else(|| Utc::now().date_naive());

    let config = TrackerConfig::from_env()?;
    let data = match config.database_url() {
        Some(url) => DataSource::Postgres(db::create_pool(url).await?),
        None => {
            info!("No database configured, using demo data");
            DataSource::Demo(DemoStore::seeded(today))
        }
    };

    let snapshot = data.snapshot().await?;
    let report = build(kind, &snapshot.sources(), today);
    let body = to_csv(&report)?;

    let path = output.unwrap_or_else(|| PathBuf::from(file_name(&report)));
    tokio::fs::write(&path, &body).await?;

    info!(
        report = kind.slug(),
        rows = report.rows.len(),
        path = %path.display(),
        "Report written"
    );
    Ok(())
}
