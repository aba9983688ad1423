//! CLI module for feedwatch
//!
//! # Commands
//!
//! - `watch` - Poll the resource and keep the terminal display current
//! - `once` - Refresh a single time and print the result
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Watch the default resource every 2 seconds
//! feedwatch watch --interval-ms 2000
//!
//! # Print the current payload once
//! feedwatch once --base-url http://127.0.0.1:8000/
//! ```

pub mod completions;
pub mod config;
pub mod once;
pub mod watch;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::config::{ConfigError, FeedwatchConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// feedwatch - mirror a polled text resource into a display
#[derive(Parser, Debug)]
#[command(
    name = "feedwatch",
    version,
    about = "Polls a text resource over HTTP and mirrors it into a display"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the resource until interrupted
    Watch(WatchArgs),
    /// Refresh once and print the result
    Once(OnceArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that fetches the resource.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "feedwatch.toml")]
    pub config: PathBuf,

    /// Override the base URL the resource path is resolved against
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Override the relative resource path
    #[arg(short = 'P', long)]
    pub path: Option<String>,

    /// Do not append the cache-busting timestamp
    #[arg(long)]
    pub no_cache_bust: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl SourceArgs {
    /// Load configuration with env and CLI overrides applied.
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub fn load_config(&self) -> Result<FeedwatchConfig, ConfigError> {
        let mut config = if self.config.exists() {
            FeedwatchConfig::load(Some(&self.config))?
        } else {
            tracing::debug!("Config file not found, using defaults");
            FeedwatchConfig::default()
        };

        config = config.with_env_overrides();

        if let Some(ref base_url) = self.base_url {
            config.poller.base_url = base_url.clone();
        }
        if let Some(ref path) = self.path {
            config.poller.resource_path = path.clone();
        }
        if self.no_cache_bust {
            config.poller.cache_bust = false;
        }
        if let Some(ref log_level) = self.log_level {
            config.logging.level = log_level.clone();
        }

        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Milliseconds between refreshes
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Do not clear the terminal before each update
    #[arg(long)]
    pub no_clear: bool,

    /// Serve the display over HTTP
    #[arg(long)]
    pub mirror: bool,

    /// Override the mirror port
    #[arg(long)]
    pub mirror_port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct OnceArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "feedwatch.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,

    /// Base URL to write into the new file
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Resource path to write into the new file
    #[arg(short = 'P', long)]
    pub path: Option<String>,

    /// Refresh interval to write into the new file
    #[arg(short, long)]
    pub interval_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
