//! Prometheus metrics endpoint

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;

/// GET /metrics - Prometheus text exposition
pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics()
        .map(|handle| handle.render())
        .ok_or_else(|| ApiError::NotFound("Metrics exporter is disabled".to_string()))
}
