//! Default Configuration Values
//!
//! This module centralizes all default values used throughout authwire.
//! Having defaults in one place makes them easier to maintain, document,
//! and adjust.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    ///
    /// Set to 30 seconds to accommodate slow API backends plus network
    /// latency and proxy delays.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout for establishing HTTP connections
    ///
    /// Set to 10 seconds which is sufficient for most network conditions
    /// while not being too aggressive.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("authwire/", env!("CARGO_PKG_VERSION"));
}

/// Authorization defaults
pub mod auth {
    /// Default upper bound on reauthorization attempts per call.
    pub const MAX_RETRY_LIMIT: u32 = 1;
}
