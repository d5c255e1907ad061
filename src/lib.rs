//! Pandemic Prediction Dashboard
//!
//! Loads a per-region daily case dataset, aggregates it per country and day,
//! and serves:
//! - per-country case trends
//! - a global map of the most recent day
//! - short-term polynomial forecasts of confirmed cases and deaths

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::dataset::{CsvDatasetLoader, DatasetError};
use tracing::{info, warn};

/// Load the configured dataset and build the shared application state.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DatasetError> {
    let dataset = CsvDatasetLoader::new(&config.dataset.path).load()?;

    if !dataset.contains_country(&config.dataset.default_country) {
        warn!(
            country = %config.dataset.default_country,
            "Default country not present in dataset"
        );
    }

    info!(
        records = dataset.len(),
        countries = dataset.country_count(),
        "Application state ready"
    );

    Ok(AppState::new(dataset, config.dataset.default_country.as_str()))
}
