//! Errors raised while loading feedwatch configuration

use std::path::PathBuf;
use thiserror::Error;

/// Why a configuration could not be used.
///
/// These are startup errors only. Nothing in a refresh cycle produces one.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// `field` is the dotted TOML key, e.g. `poller.interval_ms`.
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}

impl ConfigError {
    /// Reject the value of a dotted config key.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// The offending key, for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}
