//! Shared utilities for headers and query strings.

pub mod headers;
pub mod query;
