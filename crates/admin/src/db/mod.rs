//! Data access for the tracker `PostgreSQL` database.
//!
//! # Schema: `tracker`
//!
//! ## Tables
//!
//! - `customers` - Importers we sell to
//! - `inquiries` - Incoming product inquiries
//! - `quotations` - Price offers, optionally answering an inquiry
//! - `orders` - Confirmed export orders (LC, GST and incentive details)
//! - `shipments` - Vessel bookings per order (cascade-deleted with the order)
//! - `payments` - Invoices and receipts per order (cascade-deleted with the order)
//!
//! Deleting a customer leaves dependent records in place with a `NULL`
//! customer reference.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p export-tracker-cli -- migrate
//! ```
//!
//! When no database is configured the server uses [`DemoStore`] instead;
//! [`DataSource`] dispatches between the two.

pub mod customers;
pub mod demo;
pub mod fixtures;
pub mod inquiries;
pub mod orders;
pub mod payments;
pub mod quotations;
pub mod shipments;
pub mod source;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use customers::CustomerRepository;
pub use demo::DemoStore;
pub use inquiries::InquiryRepository;
pub use orders::OrderRepository;
pub use payments::PaymentRepository;
pub use quotations::QuotationRepository;
pub use shipments::ShipmentRepository;
pub use source::DataSource;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (duplicate record number, dangling reference).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Map a write error, turning constraint violations into [`RepositoryError::Conflict`].
///
/// `duplicate` describes the unique key (e.g. "order number already exists").
pub(crate) fn write_error(e: sqlx::Error, duplicate: &str) -> RepositoryError {
    let conflict = match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Some(duplicate.to_string())
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            Some("referenced record does not exist".to_string())
        }
        sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
            Some(db_err.message().to_string())
        }
        _ => None,
    };
    match conflict {
        Some(message) => RepositoryError::Conflict(message),
        None => RepositoryError::Database(e),
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
