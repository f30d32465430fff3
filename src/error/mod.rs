//! Error handling types for authwire.
//!
//! This module provides the error surface returned to callers:
//! - Core error types (`ClientError`, `AuthFailure`)
//! - Constructor shorthands and classification helpers
//! - Type conversions from common error types

mod conversions;
pub mod types;

pub use types::*;
