//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_forecast, record_http_request, ForecastOutcome,
    PrometheusMetrics,
};
