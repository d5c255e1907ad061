//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;

const MAX_PATH_LABEL_LEN: usize = 50;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("pandemic_dashboard_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", truncate_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// How a forecast request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastOutcome {
    Predicted,
    InsufficientData,
    Failed,
}

impl ForecastOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Predicted => "predicted",
            Self::InsufficientData => "insufficient_data",
            Self::Failed => "failed",
        }
    }
}

/// Record one forecast computation
pub fn record_forecast(outcome: ForecastOutcome, duration: Duration) {
    let labels = [("outcome", outcome.as_str())];

    counter!("forecasts_total", &labels).increment(1);
    histogram!("forecast_duration_seconds", &labels).record(duration.as_secs_f64());
}

fn truncate_path(path: &str) -> String {
    path.chars().take(MAX_PATH_LABEL_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_path_keeps_short_paths() {
        assert_eq!(truncate_path("/v1/countries/{country}/forecast"), "/v1/countries/{country}/forecast");
    }

    #[test]
    fn test_truncate_path_limits_length() {
        let path = "/very/long/path/that/exceeds/the/maximum/allowed/length/for/metrics";
        assert_eq!(truncate_path(path).len(), MAX_PATH_LABEL_LEN);
    }

    #[test]
    fn test_forecast_outcome_labels() {
        assert_eq!(ForecastOutcome::Predicted.as_str(), "predicted");
        assert_eq!(ForecastOutcome::InsufficientData.as_str(), "insufficient_data");
        assert_eq!(ForecastOutcome::Failed.as_str(), "failed");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_forecast(ForecastOutcome::Predicted, Duration::from_millis(3));
        record_http_request("GET", "/v1/dashboard", 200, Duration::from_millis(5));
    }

    #[test]
    fn test_disabled_metrics_return_none() {
        let config = MetricsConfig {
            enabled: false,
            path: "/metrics".to_string(),
        };
        assert!(init_metrics(&config).is_none());
    }
}
