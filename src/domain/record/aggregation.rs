//! Per-country, per-date aggregation of raw records.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::entity::{AggregatedRecord, CaseCounts, RawRecord};

/// Running mean over the values that are present
#[derive(Debug, Default)]
struct MeanAccumulator {
    sum: f64,
    count: u32,
}

impl MeanAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

#[derive(Debug, Default)]
struct Group {
    counts: CaseCounts,
    latitude: MeanAccumulator,
    longitude: MeanAccumulator,
}

/// Collapse raw records into one row per (country, date).
///
/// Counts are summed and coordinates averaged. Output is ordered by country,
/// then date. `days_since_start` is measured from the earliest date across the
/// whole output, not per country, so a country whose reporting starts late has
/// a non-zero first offset. An empty input yields an empty output.
pub fn aggregate(records: &[RawRecord]) -> Vec<AggregatedRecord> {
    let mut groups: BTreeMap<(&str, NaiveDate), Group> = BTreeMap::new();

    for record in records {
        let group = groups
            .entry((record.country.as_str(), record.date))
            .or_default();

        group.counts += record.counts;
        group.latitude.push(record.latitude);
        group.longitude.push(record.longitude);
    }

    let Some(start) = groups.keys().map(|(_, date)| *date).min() else {
        return Vec::new();
    };

    groups
        .into_iter()
        .map(|((country, date), group)| AggregatedRecord {
            country: country.to_string(),
            date,
            counts: group.counts,
            mean_latitude: group.latitude.mean(),
            mean_longitude: group.longitude.mean(),
            days_since_start: (date - start).num_days(),
        })
        .collect()
}
