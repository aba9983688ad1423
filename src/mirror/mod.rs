//! Read-only HTTP mirror of the display target.
//!
//! # Endpoints
//!
//! - `GET /display` - Current display text (`text/plain`)
//! - `GET /health` - Liveness plus display id and uptime
//! - `GET /metrics` - Prometheus text format metrics
//!
//! # Example
//!
//! ```rust,no_run
//! use feedwatch::display::MemoryDisplay;
//! use feedwatch::mirror::{create_router, MirrorState};
//! use std::sync::Arc;
//!
//! let display = MemoryDisplay::new("gptOutput");
//! let state = Arc::new(MirrorState::new(display));
//! let app = create_router(state);
//! ```

mod handler;

use crate::config::MirrorConfig;
use crate::display::MemoryDisplay;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Errors from running the mirror server.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Shared state for mirror handlers.
pub struct MirrorState {
    pub display: MemoryDisplay,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
    pub prometheus_handle: PrometheusHandle,
}

impl MirrorState {
    /// Create state and install the metrics recorder if none is installed yet.
    pub fn new(display: MemoryDisplay) -> Self {
        Self::with_handle(display, crate::metrics::setup_or_detached())
    }

    pub fn with_handle(display: MemoryDisplay, prometheus_handle: PrometheusHandle) -> Self {
        Self {
            display,
            start_time: Instant::now(),
            prometheus_handle,
        }
    }
}

/// Create the mirror router with all endpoints configured.
pub fn create_router(state: Arc<MirrorState>) -> Router {
    Router::new()
        .route("/display", get(handler::display_handler))
        .route("/health", get(handler::health_handler))
        .route("/metrics", get(handler::metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the mirror's listening socket.
pub async fn bind(config: &MirrorConfig) -> Result<TcpListener, MirrorError> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| MirrorError::Bind { addr, source })
}

/// Serve the mirror on `listener` until `cancel_token` fires.
pub async fn serve(
    listener: TcpListener,
    state: Arc<MirrorState>,
    cancel_token: CancellationToken,
) -> Result<(), MirrorError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(addr = %addr, "Display mirror listening");
    }

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async move { cancel_token.cancelled().await })
        .await?;

    tracing::info!("Display mirror stopped");
    Ok(())
}
