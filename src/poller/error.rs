//! Error types for fetching the polled resource.

use thiserror::Error;

/// A failed fetch-and-display cycle.
///
/// The variants only shape the log message. Every variant is handled the same
/// way: the poller writes its fallback text and waits for the next tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request timeout
    #[error("request timeout after {0}ms")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// Body could not be read as text
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Classify a reqwest error into a FetchError.
    ///
    /// Status codes never arrive here; `HttpFetcher` checks them on the response.
    pub fn from_reqwest(e: reqwest::Error, timeout_ms: Option<u64>) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(timeout_ms.unwrap_or_default())
        } else if e.is_decode() || e.is_body() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Connection(e.to_string())
        }
    }
}
