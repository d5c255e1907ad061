//! API request and response types

pub mod dashboard;
pub mod error;

pub use dashboard::{
    CountriesResponse, DashboardQuery, ForecastResponse, HorizonQuery, MapResponse, SeriesResponse,
};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
