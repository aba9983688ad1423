//! Polling module for the watched text resource.
//!
//! A [`Poller`] fetches a fixed resource over HTTP on a recurring interval and
//! writes the body into a [`DisplayTarget`]. Any failure during a cycle is
//! replaced by a fixed fallback message; nothing is surfaced to the caller.

mod config;
mod error;
mod locator;


pub use config::*;
pub use error::*;
pub use locator::*;

use crate::config::ConfigError;
use crate::display::DisplayTarget;
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Source of the resource body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return its full body as text.
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Fetcher backed by a pooled reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout_ms: Option<u64>,
}

impl HttpFetcher {
    pub fn new(timeout_ms: Option<u64>) -> Self {
        Self::with_client(reqwest::Client::new(), timeout_ms)
    }

    /// Create a fetcher with a custom HTTP client (for testing).
    pub fn with_client(client: reqwest::Client, timeout_ms: Option<u64>) -> Self {
        Self { client, timeout_ms }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let mut request = self.client.get(url.clone());
        if let Some(ms) = self.timeout_ms {
            request = request.timeout(Duration::from_millis(ms));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout_ms))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout_ms))
    }
}

/// What a single refresh did to the display target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Fetched text was written verbatim
    Updated { bytes: usize },
    /// The fallback message was written
    Fallback { error: FetchError },
}

/// Background service that mirrors a text resource into a display target.
pub struct Poller {
    fetcher: Arc<dyn Fetcher>,
    locator: ResourceLocator,
    display: Arc<dyn DisplayTarget>,
    fallback_message: String,
    interval: Duration,
}

impl Poller {
    /// Create a poller that fetches over HTTP.
    pub fn new(config: &PollerConfig, display: Arc<dyn DisplayTarget>) -> Result<Self, ConfigError> {
        let fetcher = Arc::new(HttpFetcher::new(config.timeout_ms));
        Self::with_fetcher(config, display, fetcher)
    }

    /// Create a poller with a custom fetcher (for testing).
    pub fn with_fetcher(
        config: &PollerConfig,
        display: Arc<dyn DisplayTarget>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Result<Self, ConfigError> {
        if config.interval_ms == 0 {
            return Err(ConfigError::invalid(
                "poller.interval_ms",
                "interval must be non-zero",
            ));
        }

        Ok(Self {
            fetcher,
            locator: ResourceLocator::from_config(config)?,
            display,
            fallback_message: config.fallback_message.clone(),
            interval: Duration::from_millis(config.interval_ms),
        })
    }

    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch the resource once and write the result into the display target.
    pub async fn refresh(&self) -> RefreshOutcome {
        let url = self.locator.url();
        let start = Instant::now();
        let result = self.fetcher.fetch(&url).await;

        metrics::histogram!(crate::metrics::FETCH_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());

        match result {
            Ok(text) => {
                self.display.show(&text);
                metrics::counter!(crate::metrics::REFRESH_TOTAL, "outcome" => "updated")
                    .increment(1);
                tracing::debug!(
                    url = %url,
                    display_id = self.display.id(),
                    bytes = text.len(),
                    "Display updated"
                );
                RefreshOutcome::Updated { bytes: text.len() }
            }
            Err(error) => {
                self.display.show(&self.fallback_message);
                metrics::counter!(crate::metrics::REFRESH_TOTAL, "outcome" => "fallback")
                    .increment(1);
                tracing::warn!(
                    url = %url,
                    display_id = self.display.id(),
                    error = %error,
                    "Refresh failed, showing fallback"
                );
                RefreshOutcome::Fallback { error }
            }
        }
    }

    /// Run a refresh as an independent task.
    ///
    /// Cycles never wait for each other; the last one to finish owns the display.
    fn spawn_refresh(self: &Arc<Self>) -> JoinHandle<()> {
        let poller = Arc::clone(self);
        tokio::spawn(async move {
            poller.refresh().await;
        })
    }

    /// Refresh immediately, then once per interval until `cancel_token` fires.
    pub async fn run(self: Arc<Self>, cancel_token: CancellationToken) {
        tracing::info!(
            url = %self.locator.base(),
            interval_ms = self.interval.as_millis() as u64,
            cache_bust = self.locator.cache_bust(),
            display_id = self.display.id(),
            "Poller started"
        );

        self.spawn_refresh();

        let start = tokio::time::Instant::now() + self.interval;
        let mut interval = tokio::time::interval_at(start, self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    tracing::info!("Poller shutting down");
                    break;
                }
                _ = interval.tick() => {
                    self.spawn_refresh();
                }
            }
        }
    }

    /// Start the poller background task.
    /// Returns a JoinHandle that resolves when the scheduling loop stops.
    pub fn start(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(Arc::new(self).run(cancel_token))
    }
}
