//! Record domain - raw and aggregated case records

mod aggregation;
mod entity;

pub use aggregation::aggregate;
pub use entity::{AggregatedRecord, CaseCounts, RawRecord, UNKNOWN_REGION};
