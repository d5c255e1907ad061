//! Forecast domain - quadratic regression forecasts of cases and deaths

mod error;
mod forecaster;
mod horizon;
mod pipeline;
mod prediction;

pub use error::ForecastError;
pub use forecaster::{forecast, MIN_TRAINING_SAMPLES};
pub use horizon::{Horizon, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
pub use pipeline::{LinearRegression, PolynomialFeatures, QuadraticPipeline, StandardScaler};
pub use prediction::{
    PredictionColumn, PredictionResult, PredictionRow, PredictionValue, INSUFFICIENT_DATA_METRIC,
    INSUFFICIENT_DATA_VALUE, PEAK_ESTIMATE_METRIC,
};
