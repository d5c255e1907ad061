//! Domain layer - Core business logic and entities

pub mod dataset;
pub mod error;
pub mod forecast;
pub mod record;

pub use dataset::{
    DashboardView, Dataset, GlobalMap, MapPoint, PredictionTable, TimeSeriesChart, TimeSeriesPoint,
};
pub use error::DomainError;
pub use forecast::{
    forecast, ForecastError, Horizon, PredictionResult, PredictionRow, PredictionValue,
    DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS,
};
pub use record::{aggregate, AggregatedRecord, CaseCounts, RawRecord, UNKNOWN_REGION};
