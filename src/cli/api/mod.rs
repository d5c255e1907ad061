//! API command - runs API server only (no UI)

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::{build_socket_addr, shutdown_signal};
use crate::api::{create_router, AppState};
use crate::config::{AppConfig, MetricsConfig};
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::observability::{create_metrics_router, init_metrics};

/// Run the API-only server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let state = crate::create_app_state(&config)?;
    let app = create_api_router(state, &config.metrics);

    let addr = build_socket_addr(&config)?;
    info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server shutdown complete");

    Ok(())
}

/// Create API router (no UI), with the metrics endpoint when enabled
fn create_api_router(state: AppState, metrics_config: &MetricsConfig) -> Router {
    let router = create_router(state);

    match init_metrics(metrics_config) {
        Some(metrics) => router.merge(create_metrics_router(metrics, &metrics_config.path)),
        None => router,
    }
}
