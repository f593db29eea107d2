//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default API base URL.
pub const BASE_URL: &str = "https://api.paymongo.com";

/// Default API version path segment.
pub const API_VERSION: &str = "v1";

/// Default webhook timestamp tolerance in seconds.
///
/// Zero or a negative value disables the freshness check.
pub const WEBHOOK_TOLERANCE_SECS: i64 = 300;

/// Default connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default total request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout as Duration.
#[must_use]
pub const fn connect_timeout() -> Duration {
    Duration::from_secs(CONNECT_TIMEOUT_SECS)
}

/// Default total request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
