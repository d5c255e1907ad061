use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

/// Errors raised while reading the case file. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Line {line}: invalid date '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("Line {line}: invalid value '{value}' in column '{column}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl From<DatasetError> for DomainError {
    fn from(err: DatasetError) -> Self {
        DomainError::dataset(err.to_string())
    }
}
