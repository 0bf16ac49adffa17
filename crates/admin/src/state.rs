//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::TrackerConfig;
use crate::db::{self, DataSource, DemoStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: TrackerConfig,
    data: DataSource,
    /// Fixed reporting date; `None` follows the clock.
    today: Option<NaiveDate>,
}

impl AppState {
    /// Build state around an existing data source.
    #[must_use]
    pub fn new(config: TrackerConfig, data: DataSource) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                data,
                today: None,
            }),
        }
    }

    /// Connect to the configured database, or fall back to demo data.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if a database is configured but unreachable.
    pub async fn connect(config: TrackerConfig) -> Result<Self, sqlx::Error> {
        let data = match config.database_url() {
            Some(url) => {
                let pool = db::create_pool(url).await?;
                tracing::info!("Database pool created");
                DataSource::Postgres(pool)
            }
            None => {
                tracing::warn!("No database configured, serving in-memory demo data");
                DataSource::Demo(DemoStore::seeded(Utc::now().date_naive()))
            }
        };
        Ok(Self::new(config, data))
    }

    /// Demo-mode state seeded as of `today`, with the reporting date pinned to it.
    #[must_use]
    pub fn demo(today: NaiveDate) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config: TrackerConfig::default(),
                data: DataSource::Demo(DemoStore::seeded(today)),
                today: Some(today),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn data(&self) -> &DataSource {
        &self.inner.data
    }

    /// The date all derived statistics are computed against.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.inner
            .today
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
