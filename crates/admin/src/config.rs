//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TRACKER_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`; when neither is set the server runs in demo mode)
//! - `TRACKER_DEMO_MODE` - Force demo mode even when a database is configured
//! - `TRACKER_HOST` - Bind address (default: 127.0.0.1)
//! - `TRACKER_PORT` - Listen port (default: 3000)
//! - `TRACKER_LOG_JSON` - Emit JSON log lines instead of text
//! - `TRACKER_STATIC_DIR` - Directory served under `/static` (default: crates/admin/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 0.1)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "crates/admin/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Tracker application configuration.
///
/// Implements `Debug` manually to redact the database URL.
#[derive(Clone)]
pub struct TrackerConfig {
    /// `PostgreSQL` connection URL (contains password). `None` means demo mode.
    pub database_url: Option<SecretString>,
    /// Use the in-memory demo store even when a database URL is present
    pub demo_mode: bool,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Emit structured JSON logs
    pub log_json: bool,
    /// Directory with static assets
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl std::fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerConfig")
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("demo_mode", &self.demo_mode)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_json", &self.log_json)
            .field("static_dir", &self.static_dir)
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "[REDACTED]"))
            .field("sentry_environment", &self.sentry_environment)
            .field("sentry_sample_rate", &self.sentry_sample_rate)
            .field("sentry_traces_sample_rate", &self.sentry_traces_sample_rate)
            .finish()
    }
}

impl Default for TrackerConfig {
    /// Demo-mode configuration on `127.0.0.1:3000`.
    fn default() -> Self {
        Self {
            database_url: None,
            demo_mode: true,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_json: false,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.1,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let database_url = env.database_url("TRACKER_DATABASE_URL");
        let demo_mode = database_url.is_none() || env.flag("TRACKER_DEMO_MODE")?;
        let host = env
            .get_or_default("TRACKER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TRACKER_HOST".to_string(), e.to_string()))?;
        let port = env
            .get_or_default("TRACKER_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TRACKER_PORT".to_string(), e.to_string()))?;
        let log_json = env.flag("TRACKER_LOG_JSON")?;
        let static_dir = PathBuf::from(env.get_or_default("TRACKER_STATIC_DIR", DEFAULT_STATIC_DIR));
        let sentry_dsn = env.get("SENTRY_DSN");
        let sentry_environment = env.get("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = env
            .get("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = env
            .get("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.1);

        Ok(Self {
            database_url,
            demo_mode,
            host,
            port,
            log_json,
            static_dir,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Database URL to connect to, or `None` when running on demo data.
    #[must_use]
    pub fn database_url(&self) -> Option<&SecretString> {
        if self.demo_mode {
            return None;
        }
        self.database_url.as_ref()
    }
}

// =============================================================================
// Environment helpers
// =============================================================================

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional, non-empty variable.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Get database URL with fallback to generic `DATABASE_URL`.
    fn database_url(&self, primary_key: &str) -> Option<SecretString> {
        self.get(primary_key)
            .or_else(|| self.get("DATABASE_URL"))
            .map(SecretString::from)
    }

    /// Parse a boolean flag; absent means `false`.
    fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        match self.get(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None | Some("0" | "false" | "no" | "off") => Ok(false),
            Some("1" | "true" | "yes" | "on") => Ok(true),
            Some(other) => Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("expected a boolean, got {other:?}"),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<TrackerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        TrackerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_database_run_demo_mode() {
        let config = load(&[]).unwrap();
        assert!(config.demo_mode);
        assert!(config.database_url().is_none());
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("crates/admin/static"));
        assert!(!config.log_json);
    }

    #[test]
    fn test_database_url_falls_back_to_generic_variable() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/tracker")]).unwrap();
        assert!(!config.demo_mode);
        assert_eq!(
            config.database_url().unwrap().expose_secret(),
            "postgres://localhost/tracker"
        );

        let config = load(&[
            ("TRACKER_DATABASE_URL", "postgres://db/primary"),
            ("DATABASE_URL", "postgres://db/fallback"),
        ])
        .unwrap();
        assert_eq!(
            config.database_url().unwrap().expose_secret(),
            "postgres://db/primary"
        );
    }

    #[test]
    fn test_demo_mode_flag_overrides_database() {
        let config = load(&[
            ("TRACKER_DATABASE_URL", "postgres://db/primary"),
            ("TRACKER_DEMO_MODE", "true"),
        ])
        .unwrap();
        assert!(config.demo_mode);
        assert!(config.database_url().is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = load(&[("TRACKER_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TRACKER_PORT"));

        let err = load(&[("TRACKER_LOG_JSON", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TRACKER_LOG_JSON"));
    }

    #[test]
    fn test_socket_addr() {
        let config = load(&[("TRACKER_HOST", "0.0.0.0"), ("TRACKER_PORT", "8080")]).unwrap();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_config_debug_redacts_secrets() {
        let config = load(&[
            ("TRACKER_DATABASE_URL", "postgres://user:hunter2@db/tracker"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("sentry.example.com"));
    }
}
