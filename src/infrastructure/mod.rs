//! Infrastructure layer - dataset loading, logging and metrics

pub mod dataset;
pub mod logging;
pub mod observability;
