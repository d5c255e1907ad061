//! Per-country forecast of confirmed cases and deaths

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::error::ForecastError;
use super::horizon::Horizon;
use super::pipeline::QuadraticPipeline;
use super::prediction::PredictionResult;
use crate::domain::record::AggregatedRecord;

/// A degree-2 fit needs strictly more than two points
pub const MIN_TRAINING_SAMPLES: usize = 3;

/// Forecast one country's confirmed cases and deaths `horizon_days` ahead.
///
/// `series` is the full history of a single country. Missing, non-positive or
/// out-of-range horizons fall back to the default. Series with fewer than
/// [`MIN_TRAINING_SAMPLES`] points (including an empty series for an unknown
/// country) produce the insufficient-data sentinel instead of a fit.
///
/// Only the furthest projected day is reported, clamped at zero and truncated
/// to a whole count. The peak date estimate is simply the last observed date
/// plus the horizon.
pub fn forecast(
    series: &[AggregatedRecord],
    horizon_days: Option<i64>,
) -> Result<PredictionResult, ForecastError> {
    let horizon = Horizon::normalize(horizon_days);

    if series.len() < MIN_TRAINING_SAMPLES {
        debug!(samples = series.len(), "Not enough data to forecast");
        return Ok(PredictionResult::insufficient_data());
    }

    let xs: Vec<f64> = series.iter().map(|r| r.days_since_start as f64).collect();
    let confirmed: Vec<f64> = series.iter().map(|r| r.counts.confirmed as f64).collect();
    let deaths: Vec<f64> = series.iter().map(|r| r.counts.deaths as f64).collect();

    let confirmed_model = QuadraticPipeline::fit(&xs, &confirmed)?;
    let deaths_model = QuadraticPipeline::fit(&xs, &deaths)?;

    let (last_day, last_date) = series.iter().fold(
        (i64::MIN, NaiveDate::MIN),
        |(day, date), r| (day.max(r.days_since_start), date.max(r.date)),
    );

    let future: Vec<f64> = (1..=i64::from(horizon.days()))
        .map(|offset| (last_day + offset) as f64)
        .collect();

    let predicted_confirmed = furthest(&confirmed_model.predict(&future), "confirmed")?;
    let predicted_deaths = furthest(&deaths_model.predict(&future), "deaths")?;

    let peak_date = last_date
        .checked_add_days(Days::new(u64::from(horizon.days())))
        .ok_or(ForecastError::DateOutOfRange)?;

    debug!(
        samples = series.len(),
        horizon = horizon.days(),
        predicted_confirmed,
        predicted_deaths,
        %peak_date,
        "Forecast computed"
    );

    Ok(PredictionResult::forecast(
        horizon,
        predicted_confirmed,
        predicted_deaths,
        peak_date,
    ))
}

/// Last projected value, clamped at zero and truncated
fn furthest(projection: &[f64], metric: &str) -> Result<u64, ForecastError> {
    let value = projection.last().copied().unwrap_or_default();

    if !value.is_finite() {
        return Err(ForecastError::NonFinitePrediction {
            metric: metric.to_string(),
        });
    }

    Ok(value.max(0.0).trunc() as u64)
}
