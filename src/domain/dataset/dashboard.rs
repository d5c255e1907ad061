//! Dashboard views derived from the dataset
//!
//! [`Dataset::dashboard`] is the single entry point the UI calls on every
//! interaction. It reads the table, fits fresh models and returns all three
//! outputs; nothing is cached between calls.

use chrono::NaiveDate;
use serde::Serialize;

use super::table::Dataset;
use crate::domain::error::DomainError;
use crate::domain::forecast::{forecast, Horizon, PredictionColumn, PredictionResult};
use crate::domain::record::{AggregatedRecord, CaseCounts};

/// One point of the per-country time series chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: CaseCounts,
}

/// Confirmed, deaths, recovered and active over time for one country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesChart {
    pub title: String,
    pub country: String,
    pub points: Vec<TimeSeriesPoint>,
}

/// One country on the global map; size follows confirmed, color follows deaths
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub confirmed: i64,
    pub deaths: i64,
}

/// Every country at the most recent observed date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalMap {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub points: Vec<MapPoint>,
}

/// Prediction rows with their column descriptors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionTable {
    pub columns: &'static [PredictionColumn],
    pub data: PredictionResult,
}

impl From<PredictionResult> for PredictionTable {
    fn from(data: PredictionResult) -> Self {
        Self {
            columns: PredictionResult::columns(),
            data,
        }
    }
}

/// Everything the dashboard renders for one `(country, horizon)` input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub country: String,
    pub horizon_days: Horizon,
    pub chart: TimeSeriesChart,
    pub map: GlobalMap,
    pub predictions: PredictionTable,
}

impl Dataset {
    /// Build the chart, map and prediction table for one interaction.
    ///
    /// Unknown countries yield an empty chart and the insufficient-data row.
    pub fn dashboard(
        &self,
        country: &str,
        horizon_days: Option<i64>,
    ) -> Result<DashboardView, DomainError> {
        Ok(DashboardView {
            country: country.to_string(),
            horizon_days: Horizon::normalize(horizon_days),
            chart: self.time_series(country),
            map: self.global_map(),
            predictions: self.predictions(country, horizon_days)?,
        })
    }

    pub fn time_series(&self, country: &str) -> TimeSeriesChart {
        TimeSeriesChart {
            title: format!("Trends in {}", country),
            country: country.to_string(),
            points: self
                .series(country)
                .iter()
                .map(|r| TimeSeriesPoint {
                    date: r.date,
                    counts: r.counts,
                })
                .collect(),
        }
    }

    /// Rows without coordinates cannot be placed and are left off the map
    pub fn global_map(&self) -> GlobalMap {
        GlobalMap {
            title: "Global Spread of Pandemic".to_string(),
            date: self.latest_date(),
            points: self
                .latest_snapshot()
                .into_iter()
                .filter_map(map_point)
                .collect(),
        }
    }

    pub fn predictions(
        &self,
        country: &str,
        horizon_days: Option<i64>,
    ) -> Result<PredictionTable, DomainError> {
        let result = forecast(self.series(country), horizon_days)?;
        Ok(result.into())
    }
}

fn map_point(record: &AggregatedRecord) -> Option<MapPoint> {
    Some(MapPoint {
        country: record.country.clone(),
        latitude: record.mean_latitude?,
        longitude: record.mean_longitude?,
        confirmed: record.counts.confirmed,
        deaths: record.counts.deaths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::DEFAULT_HORIZON_DAYS;
    use crate::domain::record::RawRecord;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        let mut raw = Vec::new();
        for (i, confirmed) in [2, 6, 12, 20, 30].into_iter().enumerate() {
            raw.push(
                RawRecord::new(
                    "Kenya",
                    date(3, 1 + i as u32),
                    CaseCounts::new(confirmed, confirmed / 10, 0, confirmed),
                )
                .with_coordinates(Some(-0.02), Some(37.9)),
            );
        }
        raw.push(
            RawRecord::new("Nepal", date(3, 5), CaseCounts::new(1, 0, 0, 1))
                .with_coordinates(Some(28.2), Some(84.2)),
        );
        raw.push(RawRecord::new("Oman", date(3, 5), CaseCounts::new(3, 0, 0, 3)));
        Dataset::from_raw(&raw)
    }

    #[test]
    fn test_dashboard_for_known_country() {
        let view = dataset().dashboard("Kenya", Some(10)).unwrap();

        assert_eq!(view.country, "Kenya");
        assert_eq!(view.horizon_days.days(), 10);
        assert_eq!(view.chart.title, "Trends in Kenya");
        assert_eq!(view.chart.points.len(), 5);
        assert_eq!(view.predictions.data.rows().len(), 3);
        assert_eq!(view.predictions.data.peak_date(), Some(date(3, 15)));
    }

    #[test]
    fn test_dashboard_for_unknown_country() {
        let view = dataset().dashboard("Atlantis", Some(10)).unwrap();

        assert!(view.chart.points.is_empty());
        assert!(view.predictions.data.is_insufficient());
        assert_eq!(view.map.points.len(), 2);
    }

    #[test]
    fn test_dashboard_normalizes_horizon() {
        let view = dataset().dashboard("Kenya", None).unwrap();
        assert_eq!(view.horizon_days.days(), DEFAULT_HORIZON_DAYS);
        assert_eq!(
            view.predictions.data.rows()[0].metric,
            "Predicted Confirmed Cases (30 Days)"
        );
    }

    #[test]
    fn test_global_map_uses_latest_date_and_skips_missing_coordinates() {
        let map = dataset().global_map();

        assert_eq!(map.date, Some(date(3, 5)));
        let countries: Vec<_> = map.points.iter().map(|p| p.country.as_str()).collect();
        assert_eq!(countries, vec!["Kenya", "Nepal"]);
        assert_eq!(map.points[0].confirmed, 30);
    }

    #[test]
    fn test_dashboard_is_pure() {
        let dataset = dataset();
        let first = dataset.dashboard("Kenya", Some(45)).unwrap();
        let _other = dataset.dashboard("Nepal", Some(3)).unwrap();
        let second = dataset.dashboard("Kenya", Some(45)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dashboard_serialization() {
        let view = dataset().dashboard("Kenya", Some(7)).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["horizon_days"], 7);
        assert_eq!(json["chart"]["points"][0]["date"], "2020-03-01");
        assert_eq!(json["chart"]["points"][0]["confirmed"], 2);
        assert_eq!(json["predictions"]["columns"][0]["id"], "Metric");
        assert_eq!(json["predictions"]["data"][2]["Value"], "2020-03-12");
    }
}
