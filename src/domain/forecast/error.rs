use thiserror::Error;

/// Errors raised while fitting or evaluating a forecast
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("Cannot fit a model on an empty training set")]
    EmptyTrainingSet,

    #[error("Feature and target lengths differ: {features} features, {targets} targets")]
    LengthMismatch { features: usize, targets: usize },

    #[error("Prediction for '{metric}' is not a finite number")]
    NonFinitePrediction { metric: String },

    #[error("Peak date estimate is out of the supported calendar range")]
    DateOutOfRange,
}
