//! Axum handlers for mirror endpoints.

use super::MirrorState;
use crate::display::DisplayTarget;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub display_id: String,
    pub uptime_seconds: u64,
}

/// GET /display - Current text of the display target.
pub async fn display_handler(State(state): State<Arc<MirrorState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        state.display.content(),
    )
}

/// GET /health - Liveness of the mirror.
pub async fn health_handler(State(state): State<Arc<MirrorState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        display_id: state.display.id().to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// GET /metrics - Prometheus exposition format.
///
/// Always returns 200, with an empty body if nothing has been recorded yet.
pub async fn metrics_handler(State(state): State<Arc<MirrorState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.prometheus_handle.render(),
    )
}
