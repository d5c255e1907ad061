//! Dataset domain - the immutable aggregated table and the views built on it

mod dashboard;
mod table;

pub use dashboard::{DashboardView, GlobalMap, MapPoint, PredictionTable, TimeSeriesChart, TimeSeriesPoint};
pub use table::Dataset;
