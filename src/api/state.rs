//! Application state shared by all handlers

use std::sync::Arc;

use crate::domain::Dataset;

/// Read-only state: the aggregated dataset and dashboard defaults.
///
/// Cloning is cheap; every clone points at the same dataset.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub default_country: Arc<str>,
}

impl AppState {
    pub fn new(dataset: Dataset, default_country: impl Into<Arc<str>>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            default_country: default_country.into(),
        }
    }
}
