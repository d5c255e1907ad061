//! Dataset infrastructure - loading the case file from disk

mod csv_loader;
mod error;

pub use csv_loader::{read_records, CsvDatasetLoader, REQUIRED_COLUMNS};
pub use error::DatasetError;
