//! Resolution of the polled resource URL.

use crate::config::ConfigError;
use reqwest::Url;

/// Query key carrying the cache-busting timestamp.
pub const CACHE_BUST_KEY: &str = "_";

/// Fixed location of the polled text resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    url: Url,
    cache_bust: bool,
}

impl ResourceLocator {
    /// Resolve `path` against `base_url`.
    ///
    /// Follows URL reference rules, so a base without a trailing slash has its
    /// last segment replaced by `path`.
    pub fn new(base_url: &str, path: &str, cache_bust: bool) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url).map_err(|e| ConfigError::invalid("poller.base_url", e.to_string()))?;
        let url = base.join(path).map_err(|e| ConfigError::invalid("poller.resource_path", e.to_string()))?;

        Ok(Self { url, cache_bust })
    }

    /// Build a locator from poller configuration.
    pub fn from_config(config: &super::PollerConfig) -> Result<Self, ConfigError> {
        Self::new(&config.base_url, &config.resource_path, config.cache_bust)
    }

    /// The resolved URL without any cache-busting query.
    pub fn base(&self) -> &Url {
        &self.url
    }

    pub fn cache_bust(&self) -> bool {
        self.cache_bust
    }

    /// URL to request at `now_ms` milliseconds since the Unix epoch.
    pub fn url_at(&self, now_ms: i64) -> Url {
        let mut url = self.url.clone();
        if self.cache_bust {
            url.query_pairs_mut()
                .append_pair(CACHE_BUST_KEY, &now_ms.to_string());
        }
        url
    }

    /// URL to request now.
    pub fn url(&self) -> Url {
        self.url_at(chrono::Utc::now().timestamp_millis())
    }
}
