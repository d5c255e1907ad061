//! Prediction table returned by the forecaster

use chrono::NaiveDate;
use serde::Serialize;

use super::horizon::Horizon;

pub const INSUFFICIENT_DATA_METRIC: &str = "Insufficient Data";
pub const INSUFFICIENT_DATA_VALUE: &str = "Predictions unavailable.";
pub const PEAK_ESTIMATE_METRIC: &str = "Peak Case Load Estimate";

/// A value cell in the prediction table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PredictionValue {
    Count(u64),
    Date(NaiveDate),
    Text(String),
}

impl std::fmt::Display for PredictionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One `(metric, value)` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRow {
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: PredictionValue,
}

impl PredictionRow {
    pub fn new(metric: impl Into<String>, value: PredictionValue) -> Self {
        Self {
            metric: metric.into(),
            value,
        }
    }
}

/// Table column descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionColumn {
    pub name: &'static str,
    pub id: &'static str,
}

const COLUMNS: [PredictionColumn; 2] = [
    PredictionColumn {
        name: "Metric",
        id: "Metric",
    },
    PredictionColumn {
        name: "Value",
        id: "Value",
    },
];

/// Ordered prediction rows for one country and horizon.
///
/// Either exactly three rows (confirmed, deaths, peak date) or the single
/// insufficient-data sentinel row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredictionResult {
    rows: Vec<PredictionRow>,
}

impl PredictionResult {
    pub fn forecast(
        horizon: Horizon,
        confirmed: u64,
        deaths: u64,
        peak_date: NaiveDate,
    ) -> Self {
        let days = horizon.days();
        Self {
            rows: vec![
                PredictionRow::new(
                    format!("Predicted Confirmed Cases ({} Days)", days),
                    PredictionValue::Count(confirmed),
                ),
                PredictionRow::new(
                    format!("Predicted Deaths ({} Days)", days),
                    PredictionValue::Count(deaths),
                ),
                PredictionRow::new(PEAK_ESTIMATE_METRIC, PredictionValue::Date(peak_date)),
            ],
        }
    }

    pub fn insufficient_data() -> Self {
        Self {
            rows: vec![PredictionRow::new(
                INSUFFICIENT_DATA_METRIC,
                PredictionValue::Text(INSUFFICIENT_DATA_VALUE.to_string()),
            )],
        }
    }

    pub fn rows(&self) -> &[PredictionRow] {
        &self.rows
    }

    pub fn columns() -> &'static [PredictionColumn] {
        &COLUMNS
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self.rows.as_slice(), [row] if row.metric == INSUFFICIENT_DATA_METRIC)
    }

    pub fn predicted_confirmed(&self) -> Option<u64> {
        self.count_at(0)
    }

    pub fn predicted_deaths(&self) -> Option<u64> {
        self.count_at(1)
    }

    pub fn peak_date(&self) -> Option<NaiveDate> {
        match self.rows.get(2).map(|r| &r.value) {
            Some(PredictionValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    fn count_at(&self, index: usize) -> Option<u64> {
        match self.rows.get(index).map(|r| &r.value) {
            Some(PredictionValue::Count(n)) => Some(*n),
            _ => None,
        }
    }
}
