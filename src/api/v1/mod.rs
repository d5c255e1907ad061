//! Dashboard v1 API endpoints

pub mod countries;
pub mod dashboard;

use std::time::Instant;

use axum::{routing::get, Router};

use super::state::AppState;
use crate::domain::{DomainError, PredictionTable};
use crate::infrastructure::observability::{record_forecast, ForecastOutcome};

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/map", get(dashboard::get_map))
        .route("/countries", get(countries::list_countries))
        .route("/countries/{country}/series", get(countries::get_series))
        .route("/countries/{country}/forecast", get(countries::get_forecast))
}

/// Record the outcome and latency of a forecast computation
fn observe_forecast(started: Instant, result: Result<&PredictionTable, &DomainError>) {
    let outcome = match result {
        Ok(table) if table.data.is_insufficient() => ForecastOutcome::InsufficientData,
        Ok(_) => ForecastOutcome::Predicted,
        Err(_) => ForecastOutcome::Failed,
    };

    record_forecast(outcome, started.elapsed());
}
