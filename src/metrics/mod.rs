//! # Metrics
//!
//! Metric names recorded by the poller and the Prometheus recorder setup used
//! by the display mirror's `GET /metrics` endpoint.
//!
//! **Counters:**
//! - `feedwatch_refresh_total{outcome}` - Refresh cycles by outcome (`updated`, `fallback`)
//!
//! **Histograms:**
//! - `feedwatch_fetch_duration_seconds` - Time from request start to body or error

pub use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Refresh cycles by outcome.
pub const REFRESH_TOTAL: &str = "feedwatch_refresh_total";

/// Fetch duration in seconds.
pub const FETCH_DURATION_SECONDS: &str = "feedwatch_fetch_duration_seconds";

/// Install the global Prometheus recorder.
///
/// Duration buckets: [0.01, 0.05, 0.1, 0.25, 0.5, 1, 2.5, 5, 10, 30].
pub fn setup_metrics() -> Result<PrometheusHandle, Box<dyn std::error::Error>> {
    use metrics_exporter_prometheus::Matcher;

    let duration_buckets = &[0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(FETCH_DURATION_SECONDS.to_string()),
            duration_buckets,
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Install the global recorder, or build a detached one if a recorder is
/// already installed (e.g. several mirrors in one test process).
pub fn setup_or_detached() -> PrometheusHandle {
    setup_metrics().unwrap_or_else(|e| {
        tracing::debug!("Metrics already initialized, creating new handle: {}", e);
        PrometheusBuilder::new().build_recorder().handle()
    })
}
