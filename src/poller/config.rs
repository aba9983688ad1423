//! Configuration for the poller.

use serde::{Deserialize, Serialize};

/// Default relative path of the polled resource.
pub const DEFAULT_RESOURCE_PATH: &str = "gold_gpt_data.txt";

/// Text written to the display target when a cycle fails.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Error loading data.";

/// Configuration for the refresh loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// URL the resource path is resolved against
    pub base_url: String,
    /// Relative path of the text resource
    pub resource_path: String,
    /// Milliseconds between refresh cycles
    pub interval_ms: u64,
    /// Append `_=<timestamp>` to every request
    pub cache_bust: bool,
    /// Text shown when a cycle fails
    pub fallback_message: String,
    /// Optional per-request timeout; unset means wait for the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            interval_ms: 3000,
            cache_bust: true,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            timeout_ms: None,
        }
    }
}
