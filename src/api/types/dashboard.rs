//! Dashboard query parameters and response bodies

use serde::{Deserialize, Serialize};

use crate::domain::{GlobalMap, Horizon, PredictionTable, TimeSeriesChart};

/// Query for the full dashboard. Both inputs are optional and lenient.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub country: Option<String>,
    pub days: Option<String>,
}

impl DashboardQuery {
    /// Selected country, or the fallback when absent or blank
    pub fn country_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(fallback)
    }

    pub fn horizon(&self) -> Horizon {
        Horizon::parse(self.days.as_deref())
    }
}

/// Query carrying only the horizon
#[derive(Debug, Default, Deserialize)]
pub struct HorizonQuery {
    pub days: Option<String>,
}

impl HorizonQuery {
    pub fn horizon(&self) -> Horizon {
        Horizon::parse(self.days.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub default_country: String,
    pub countries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    #[serde(flatten)]
    pub chart: TimeSeriesChart,
}

#[derive(Debug, Serialize)]
pub struct MapResponse {
    #[serde(flatten)]
    pub map: GlobalMap,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub country: String,
    pub horizon_days: Horizon,
    #[serde(flatten)]
    pub table: PredictionTable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_HORIZON_DAYS;

    #[test]
    fn test_country_fallback() {
        let query = DashboardQuery::default();
        assert_eq!(query.country_or("United States"), "United States");

        let query = DashboardQuery {
            country: Some("  ".to_string()),
            days: None,
        };
        assert_eq!(query.country_or("United States"), "United States");

        let query = DashboardQuery {
            country: Some(" India ".to_string()),
            days: None,
        };
        assert_eq!(query.country_or("United States"), "India");
    }

    #[test]
    fn test_lenient_horizon() {
        let query = DashboardQuery {
            country: None,
            days: Some("ten".to_string()),
        };
        assert_eq!(query.horizon().days(), DEFAULT_HORIZON_DAYS);

        let query = HorizonQuery {
            days: Some("21".to_string()),
        };
        assert_eq!(query.horizon().days(), 21);
    }
}
