//! Default values for configuration options.

use std::time::Duration;

/// Default pause between polling cycles in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 500;

/// Default HTTP request timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default polling interval as Duration.
#[must_use]
pub const fn poll_interval() -> Duration {
    Duration::from_millis(POLL_INTERVAL_MS)
}

/// Default HTTP request timeout as Duration.
#[must_use]
pub const fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}
