//! Core types for Export Tracker.
//!
//! This module provides type-safe wrappers for entity IDs and the closed
//! status vocabularies shared by every record.

pub mod id;
pub mod status;
pub mod validation;

pub use id::*;
pub use status::*;
pub use validation::{Numeric, ValidationError};
