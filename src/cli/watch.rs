//! Watch command implementation

use crate::cli::WatchArgs;
use crate::config::{ConfigError, FeedwatchConfig, LogFormat};
use crate::display::{DisplayTarget, MemoryDisplay, TeeDisplay, TerminalDisplay};
use crate::mirror::{self, MirrorState};
use crate::poller::Poller;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with watch-specific CLI overrides
pub fn load_config_with_overrides(args: &WatchArgs) -> Result<FeedwatchConfig, ConfigError> {
    let mut config = args.source.load_config()?;

    if let Some(interval_ms) = args.interval_ms {
        config.poller.interval_ms = interval_ms;
    }
    if args.no_clear {
        config.display.clear_screen = false;
    }
    if args.mirror {
        config.mirror.enabled = true;
    }
    if let Some(port) = args.mirror_port {
        config.mirror.port = port;
    }

    Ok(config)
}

/// Initialize tracing based on configuration
///
/// Logs go to stderr so they never interleave with the terminal display.
pub fn init_tracing(
    config: &crate::config::LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    cancel_token.cancel();
}

/// Main watch command handler
pub async fn run_watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load, merge and validate configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;
    tracing::debug!(?config, "Loaded configuration");

    // 3. Build the display target, with the mirror attached if enabled
    let cancel_token = CancellationToken::new();
    let terminal: Arc<dyn DisplayTarget> = Arc::new(TerminalDisplay::stdout(
        config.display.id.clone(),
        config.display.clear_screen,
        config.display.header,
    ));

    let (display, mirror_handle) = if config.mirror.enabled {
        let memory = MemoryDisplay::new(config.display.id.clone());
        let listener = mirror::bind(&config.mirror).await?;
        let state = Arc::new(MirrorState::new(memory.clone()));
        let handle = tokio::spawn(mirror::serve(listener, state, cancel_token.clone()));

        let display: Arc<dyn DisplayTarget> =
            Arc::new(TeeDisplay::new(vec![terminal, Arc::new(memory)]));
        (display, Some(handle))
    } else {
        (terminal, None)
    };

    // 4. Start polling
    let poller = Poller::new(&config.poller, display)?;
    let poller_handle = poller.start(cancel_token.clone());

    // 5. Run until interrupted
    shutdown_signal(cancel_token).await;

    // 6. Cleanup
    poller_handle.await?;
    if let Some(handle) = mirror_handle {
        tracing::info!("Waiting for display mirror to stop");
        handle.await??;
    }

    tracing::info!("feedwatch stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceArgs;
    use std::path::PathBuf;

    fn watch_args() -> WatchArgs {
        WatchArgs {
            source: SourceArgs {
                config: PathBuf::from("nonexistent-feedwatch.toml"),
                base_url: None,
                path: None,
                no_cache_bust: false,
                log_level: None,
            },
            interval_ms: None,
            no_clear: false,
            mirror: false,
            mirror_port: None,
        }
    }

    #[test]
    fn test_watch_defaults() {
        let config = load_config_with_overrides(&watch_args()).unwrap();
        assert!(config.display.clear_screen);
        assert_eq!(config.mirror.port, 8787);
    }

    #[test]
    fn test_watch_cli_overrides_config() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[poller]\ninterval_ms = 3000\n[mirror]\nport = 9000").unwrap();

        let mut args = watch_args();
        args.source.config = temp.path().to_path_buf();
        args.interval_ms = Some(2000);
        args.no_clear = true;
        args.mirror = true;

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.poller.interval_ms, 2000); // CLI wins
        assert!(!config.display.clear_screen);
        assert!(config.mirror.enabled);
        assert_eq!(config.mirror.port, 9000); // from file
    }

    #[test]
    fn test_watch_mirror_port_override() {
        let mut args = watch_args();
        args.mirror_port = Some(9999);

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.mirror.port, 9999);
    }

    #[tokio::test]
    async fn test_shutdown_signal_cancel_stops_poller() {
        let display = Arc::new(MemoryDisplay::new("out"));
        let config = crate::poller::PollerConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            timeout_ms: Some(100),
            ..Default::default()
        };
        let poller = Poller::new(&config, display).unwrap();

        let cancel = CancellationToken::new();
        let handle = poller.start(cancel.clone());

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        cancel.cancel();

        let result = tokio::time::timeout(std::time::Duration::from_secs(1), handle).await;
        assert!(result.is_ok());
    }
}
