//! Dashboard endpoint handlers

use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, error};

use super::observe_forecast;
use crate::api::state::AppState;
use crate::api::types::{ApiError, DashboardQuery, MapResponse};
use crate::domain::DashboardView;

/// GET /v1/dashboard?country=&days=
///
/// Chart, map and predictions for one interaction, recomputed from scratch.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, ApiError> {
    let country = query.country_or(&state.default_country);
    let horizon = query.horizon();
    debug!(country = %country, horizon = horizon.days(), "Building dashboard");

    let started = Instant::now();
    let result = state
        .dataset
        .dashboard(country, Some(i64::from(horizon.days())));
    observe_forecast(started, result.as_ref().map(|view| &view.predictions));

    match result {
        Ok(view) => Ok(Json(view)),
        Err(e) => {
            error!(country = %country, error = %e, "Dashboard computation failed");
            Err(e.into())
        }
    }
}

/// GET /v1/map
pub async fn get_map(State(state): State<AppState>) -> Json<MapResponse> {
    Json(MapResponse {
        map: state.dataset.global_map(),
    })
}
