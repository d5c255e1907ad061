//! Aggregated case table

use std::collections::BTreeMap;
use std::ops::Range;

use chrono::NaiveDate;

use crate::domain::record::{aggregate, AggregatedRecord, RawRecord};

/// Aggregated records for every country, built once at startup.
///
/// Rows are kept sorted by `(country, date)` so each country's history is a
/// contiguous slice. The table is never mutated after construction and is
/// shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<AggregatedRecord>,
    countries: BTreeMap<String, Range<usize>>,
    latest_date: Option<NaiveDate>,
}

impl Dataset {
    /// Aggregate raw records into a dataset
    pub fn from_raw(records: &[RawRecord]) -> Self {
        Self::from_aggregated(aggregate(records))
    }

    /// Build from rows that are already aggregated
    pub fn from_aggregated(mut records: Vec<AggregatedRecord>) -> Self {
        records.sort_by(|a, b| a.country.cmp(&b.country).then(a.date.cmp(&b.date)));

        let mut countries: BTreeMap<String, Range<usize>> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            countries
                .entry(record.country.clone())
                .and_modify(|range| range.end = idx + 1)
                .or_insert(idx..idx + 1);
        }

        let latest_date = records.iter().map(|r| r.date).max();

        Self {
            records,
            countries,
            latest_date,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AggregatedRecord] {
        &self.records
    }

    /// Distinct country names in ascending order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.countries.contains_key(country)
    }

    /// Full history of one country, oldest first; empty if unknown
    pub fn series(&self, country: &str) -> &[AggregatedRecord] {
        self.countries
            .get(country)
            .map(|range| &self.records[range.clone()])
            .unwrap_or(&[])
    }

    /// Most recent date observed for any country
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.latest_date
    }

    /// All countries' rows on a single date
    pub fn snapshot(&self, date: NaiveDate) -> impl Iterator<Item = &AggregatedRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }

    /// All countries' rows on the most recent date
    pub fn latest_snapshot(&self) -> Vec<&AggregatedRecord> {
        match self.latest_date {
            Some(date) => self.snapshot(date).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::CaseCounts;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, m, d).unwrap()
    }

    fn raw(country: &str, date: NaiveDate, confirmed: i64) -> RawRecord {
        RawRecord::new(country, date, CaseCounts::new(confirmed, 0, 0, confirmed))
    }

    fn sample() -> Dataset {
        Dataset::from_raw(&[
            raw("Italy", date(3, 2), 20),
            raw("Italy", date(3, 1), 10),
            raw("Germany", date(3, 1), 5),
            raw("Italy", date(3, 3), 40),
            raw("Germany", date(3, 2), 8),
        ])
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_raw(&[]);

        assert!(dataset.is_empty());
        assert_eq!(dataset.country_count(), 0);
        assert_eq!(dataset.latest_date(), None);
        assert!(dataset.latest_snapshot().is_empty());
        assert!(dataset.series("Italy").is_empty());
    }

    #[test]
    fn test_countries_are_sorted_and_distinct() {
        let dataset = sample();
        let countries: Vec<_> = dataset.countries().collect();

        assert_eq!(countries, vec!["Germany", "Italy"]);
        assert!(dataset.contains_country("Italy"));
        assert!(!dataset.contains_country("France"));
    }

    #[test]
    fn test_series_is_contiguous_and_ordered() {
        let dataset = sample();
        let italy = dataset.series("Italy");

        assert_eq!(italy.len(), 3);
        assert!(italy.iter().all(|r| r.country == "Italy"));
        let dates: Vec<_> = italy.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(3, 1), date(3, 2), date(3, 3)]);
    }

    #[test]
    fn test_unknown_country_has_empty_series() {
        assert!(sample().series("Atlantis").is_empty());
    }

    #[test]
    fn test_latest_snapshot() {
        let dataset = sample();
        assert_eq!(dataset.latest_date(), Some(date(3, 3)));

        let latest = dataset.latest_snapshot();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].country, "Italy");
        assert_eq!(latest[0].counts.confirmed, 40);

        assert_eq!(dataset.snapshot(date(3, 1)).count(), 2);
    }

    #[test]
    fn test_from_aggregated_sorts_rows() {
        let dataset = sample();
        let mut rows = dataset.records().to_vec();
        rows.reverse();

        let rebuilt = Dataset::from_aggregated(rows);
        assert_eq!(rebuilt.records(), dataset.records());
        assert_eq!(rebuilt.series("Germany").len(), 2);
    }
}
