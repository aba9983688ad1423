//! Configuration module for feedwatch
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`FEEDWATCH_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use feedwatch::config::FeedwatchConfig;
//!
//! let toml = r#"
//! [poller]
//! interval_ms = 2000
//! "#;
//! let config: FeedwatchConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.poller.interval_ms, 2000);
//! assert_eq!(config.poller.resource_path, "gold_gpt_data.txt");
//! ```

pub mod display;
pub mod error;
pub mod logging;
pub mod mirror;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use mirror::MirrorConfig;

// Re-export PollerConfig from poller module
pub use crate::poller::PollerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Example configuration shipped with the crate.
pub const EXAMPLE_CONFIG: &str = include_str!("../../feedwatch.example.toml");

/// Unified configuration for feedwatch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeedwatchConfig {
    /// What to fetch and how often
    pub poller: PollerConfig,
    /// Terminal display settings
    pub display: DisplayConfig,
    /// Optional HTTP mirror of the display
    pub mirror: MirrorConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl FeedwatchConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: p.to_path_buf(),
                    message: e.to_string(),
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports FEEDWATCH_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("FEEDWATCH_BASE_URL") {
            self.poller.base_url = url;
        }
        if let Ok(interval) = std::env::var("FEEDWATCH_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.poller.interval_ms = ms;
            }
        }

        if let Ok(level) = std::env::var("FEEDWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FEEDWATCH_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(mirror) = std::env::var("FEEDWATCH_MIRROR") {
            self.mirror.enabled = mirror.to_lowercase() == "true";
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poller.interval_ms == 0 {
            return Err(ConfigError::invalid("poller.interval_ms", "interval must be non-zero"));
        }
        if self.poller.resource_path.is_empty() {
            return Err(ConfigError::invalid("poller.resource_path", "path cannot be empty"));
        }
        if self.poller.fallback_message.is_empty() {
            return Err(ConfigError::invalid(
                "poller.fallback_message",
                "fallback message cannot be empty",
            ));
        }
        if self.display.id.is_empty() {
            return Err(ConfigError::invalid("display.id", "display id cannot be empty"));
        }
        if self.mirror.enabled && self.mirror.port == 0 {
            return Err(ConfigError::invalid("mirror.port", "port must be non-zero"));
        }

        self.logging.validate()?;

        // Resolves base_url + resource_path, rejecting malformed URLs
        crate::poller::ResourceLocator::from_config(&self.poller)?;

        Ok(())
    }
}
