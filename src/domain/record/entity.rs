//! Record entities

use std::ops::AddAssign;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Region name used when a record has no province/state
pub const UNKNOWN_REGION: &str = "Unknown";

/// The four case metrics tracked per record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCounts {
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
    pub active: i64,
}

impl CaseCounts {
    pub fn new(confirmed: i64, deaths: i64, recovered: i64, active: i64) -> Self {
        Self {
            confirmed,
            deaths,
            recovered,
            active,
        }
    }
}

impl AddAssign for CaseCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.confirmed += rhs.confirmed;
        self.deaths += rhs.deaths;
        self.recovered += rhs.recovered;
        self.active += rhs.active;
    }
}

/// One sub-region's counts on one day, as read from the input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub region: String,
    pub country: String,
    pub date: NaiveDate,
    pub counts: CaseCounts,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RawRecord {
    pub fn new(country: impl Into<String>, date: NaiveDate, counts: CaseCounts) -> Self {
        Self {
            region: UNKNOWN_REGION.to_string(),
            country: country.into(),
            date,
            counts,
            latitude: None,
            longitude: None,
        }
    }

    /// Set the region; blank names fall back to [`UNKNOWN_REGION`]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        self.region = if region.trim().is_empty() {
            UNKNOWN_REGION.to_string()
        } else {
            region
        };
        self
    }

    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }
}

/// One country's totals on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    pub country: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: CaseCounts,
    pub mean_latitude: Option<f64>,
    pub mean_longitude: Option<f64>,
    /// Day offset from the earliest date of the whole dataset
    pub days_since_start: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_case_counts_add_assign() {
        let mut total = CaseCounts::new(1, 2, 3, 4);
        total += CaseCounts::new(10, 20, 30, -5);

        assert_eq!(total, CaseCounts::new(11, 22, 33, -1));
    }

    #[test]
    fn test_raw_record_defaults_to_unknown_region() {
        let record = RawRecord::new("Italy", date(2020, 3, 1), CaseCounts::default());
        assert_eq!(record.region, UNKNOWN_REGION);
    }

    #[test]
    fn test_blank_region_falls_back_to_unknown() {
        let record = RawRecord::new("Italy", date(2020, 3, 1), CaseCounts::default())
            .with_region("   ");
        assert_eq!(record.region, UNKNOWN_REGION);

        let record = record.with_region("Lombardy");
        assert_eq!(record.region, "Lombardy");
    }

    #[test]
    fn test_aggregated_record_serializes_flat_counts() {
        let record = AggregatedRecord {
            country: "Chile".to_string(),
            date: date(2020, 4, 2),
            counts: CaseCounts::new(5, 1, 0, 4),
            mean_latitude: Some(-35.6),
            mean_longitude: None,
            days_since_start: 71,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["confirmed"], 5);
        assert_eq!(json["date"], "2020-04-02");
        assert_eq!(json["days_since_start"], 71);
        assert!(json["mean_longitude"].is_null());
    }
}
