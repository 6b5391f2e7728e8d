use axum::{extract::State, http::StatusCode};
use prometheus::{Encoder, TextEncoder};
use tracing::warn;

use crate::{services::metrics, AppState};

/// GET /metrics: Prometheus scrape endpoint.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    if let Err(e) = metrics::collect(&state.store).await {
        warn!("Metrics: refresh on scrape failed: {}", e);
    }
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    String::from_utf8(buffer).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
