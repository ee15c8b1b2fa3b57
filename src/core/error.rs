//! Custom error types for the application.
//!
//! Error categories per domain:
//!
//! - [`FetchError`] - Listing requests to the file-listing endpoint
//! - [`ChannelError`] - Live-update transport failures
//! - [`ConfigError`] - Invalid `data-*` configuration overrides
//!
//! None of these are fatal: every failure path either retries on the next
//! trigger or degrades to a stale listing.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Live-update channel errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The runtime has no `EventSource` implementation.
    #[error("server-sent events are not supported by this runtime")]
    Unsupported,
    /// Opening the subscription failed synchronously.
    #[error("failed to open event stream: {0}")]
    OpenFailed(String),
}

/// Configuration override errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("data-{0} is empty")]
    Empty(String),
    #[error("data-{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: String, value: String },
    #[error("unknown log level {value:?}")]
    InvalidLogLevel { value: String },
}
