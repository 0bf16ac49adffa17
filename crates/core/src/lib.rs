//! Export Tracker Core - domain types and pure business logic.
//!
//! This crate is shared by every Export Tracker component:
//! - `admin` - the web application (HTML pages, JSON API, CSV downloads)
//! - `cli` - command-line tools for migrations, seeding and reports
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. Database encodings for the ID and status types
//! are available behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, status enums and validation errors
//! - [`models`] - Customers, inquiries, quotations, orders, shipments, payments
//! - [`analytics`] - Aging, dashboard counters, ledgers, LC alerts, status tones
//! - [`format`] - Currency and date display
//! - [`query`] - List-page filters
//! - [`reports`] - Tabular report builders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod format;
pub mod models;
pub mod query;
pub mod reports;
pub mod types;

pub use types::*;
