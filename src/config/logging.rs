//! Logging configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// Modules that accept a `[logging.component_levels]` entry.
pub const COMPONENTS: &[&str] = &["cli", "config", "display", "mirror", "poller"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines on stderr
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Logging configuration
///
/// Refresh failures log at `warn` and successes at `debug`, so the default
/// level shows only failed cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Per-module levels, keyed by a name from [`COMPONENTS`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<HashMap<String, String>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            component_levels: None,
        }
    }
}

impl LoggingConfig {
    /// Reject unknown levels and component names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| ConfigError::invalid("logging.level", unknown_level(&self.level)))?;

        for (component, level) in self.component_levels.iter().flatten() {
            let field = format!("logging.component_levels.{}", component);
            if !COMPONENTS.contains(&component.as_str()) {
                return Err(ConfigError::invalid(
                    &field,
                    format!("unknown component, expected one of {}", COMPONENTS.join(", ")),
                ));
            }
            LevelFilter::from_str(level)
                .map_err(|_| ConfigError::invalid(&field, unknown_level(level)))?;
        }

        Ok(())
    }
}

fn unknown_level(level: &str) -> String {
    format!(
        "unknown level '{}', expected trace, debug, info, warn, error or off",
        level
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_components(pairs: &[(&str, &str)]) -> LoggingConfig {
        LoggingConfig {
            component_levels: Some(
                pairs
                    .iter()
                    .map(|(c, l)| (c.to_string(), l.to_string()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.component_levels.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_format_serde() {
        let json = serde_json::to_string(&LogFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_component_levels_accepted() {
        let config = with_components(&[("poller", "debug"), ("mirror", "INFO")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_level_rejected() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("logging.level"));
    }

    #[test]
    fn test_unknown_component_rejected() {
        let config = with_components(&[("routing", "debug")]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("logging.component_levels.routing"));
    }

    #[test]
    fn test_bad_component_level_rejected() {
        let config = with_components(&[("poller", "verbose")]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("logging.component_levels.poller"));
    }
}
