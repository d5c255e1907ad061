//! Forecast horizon normalization

use serde::Serialize;

/// Horizon used when the input is missing, non-numeric or out of range
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Largest horizon accepted as-is
pub const MAX_HORIZON_DAYS: u32 = 1000;

/// Number of calendar days to project past the last observation.
///
/// Always within `1..=MAX_HORIZON_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub struct Horizon(u32);

impl Horizon {
    /// Normalize a raw day count, substituting the default for missing,
    /// zero, negative or oversized values
    pub fn normalize(days: Option<i64>) -> Self {
        match days {
            Some(d) if (1..=i64::from(MAX_HORIZON_DAYS)).contains(&d) => Self(d as u32),
            _ => Self::default(),
        }
    }

    /// Normalize free-form user input such as a query string value
    pub fn parse(input: Option<&str>) -> Self {
        Self::normalize(input.and_then(|s| s.trim().parse::<i64>().ok()))
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(DEFAULT_HORIZON_DAYS)
    }
}

impl From<Option<i64>> for Horizon {
    fn from(days: Option<i64>) -> Self {
        Self::normalize(days)
    }
}

impl From<Horizon> for u32 {
    fn from(horizon: Horizon) -> Self {
        horizon.0
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
