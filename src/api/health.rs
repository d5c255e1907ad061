//! Health check endpoints for Kubernetes probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Health response with dataset status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetHealth>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize)]
pub struct DatasetHealth {
    pub records: usize,
    pub countries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_date: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check. An empty dataset still serves requests but is reported
/// as degraded.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = &state.dataset;
    let status = if dataset.is_empty() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: Some(DatasetHealth {
            records: dataset.len(),
            countries: dataset.country_count(),
            latest_date: dataset.latest_date().map(|d| d.to_string()),
        }),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
