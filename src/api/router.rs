use std::path::Path;

use axum::{middleware, response::Redirect, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::types::ApiError;
use super::v1;

/// Create the API router (health probes and v1 endpoints)
pub fn create_router(state: AppState) -> Router {
    api_routes()
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Create the API router plus the dashboard page served from `static_dir`
pub fn create_router_with_ui(state: AppState, static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    api_routes()
        .nest_service(
            "/ui",
            ServeDir::new(static_dir).fallback(ServeFile::new(index)),
        )
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .fallback(|| async { ApiError::not_found("No such endpoint") })
}
