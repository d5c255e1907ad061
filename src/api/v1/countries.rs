//! Country endpoint handlers

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, error};

use super::observe_forecast;
use crate::api::state::AppState;
use crate::api::types::{ApiError, CountriesResponse, ForecastResponse, HorizonQuery, SeriesResponse};
use crate::domain::DomainError;

/// GET /v1/countries
pub async fn list_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        default_country: state.default_country.to_string(),
        countries: state.dataset.countries().map(str::to_string).collect(),
    })
}

/// GET /v1/countries/{country}/series
pub async fn get_series(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<SeriesResponse>, ApiError> {
    if !state.dataset.contains_country(&country) {
        return Err(DomainError::not_found(format!("Country '{}' not found", country)).into());
    }

    Ok(Json(SeriesResponse {
        chart: state.dataset.time_series(&country),
    }))
}

/// GET /v1/countries/{country}/forecast?days=
///
/// Unknown countries are not an error here: they get the insufficient-data row.
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(country): Path<String>,
    Query(query): Query<HorizonQuery>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let horizon = query.horizon();
    debug!(country = %country, horizon = horizon.days(), "Forecasting");

    let started = Instant::now();
    let result = state
        .dataset
        .predictions(&country, Some(i64::from(horizon.days())));
    observe_forecast(started, result.as_ref());

    match result {
        Ok(table) => Ok(Json(ForecastResponse {
            country,
            horizon_days: horizon,
            table,
        })),
        Err(e) => {
            error!(country = %country, error = %e, "Forecast failed");
            Err(e.into())
        }
    }
}
