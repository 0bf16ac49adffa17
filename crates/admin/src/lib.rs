//! Export Tracker web application.
//!
//! Server-rendered pages, a JSON API and CSV downloads over the tracked
//! customers, inquiries, quotations, orders, shipments and payments. Data
//! lives in `PostgreSQL`, or in an in-memory demo store when no database is
//! configured.
//!
//! The binary in `main.rs` adds logging, Sentry and the listener around
//! [`app`]; integration tests drive [`app`] directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod routes;
pub mod state;

use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::services::ServeDir;

use state::AppState;

/// Build the full application router: health checks, pages, API and static files.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK. Always ready on demo data.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.data().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
