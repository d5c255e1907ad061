//! CSV loader for per-region daily case records

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{info, warn};

use super::error::DatasetError;
use crate::domain::{CaseCounts, Dataset, RawRecord};

const REGION: &str = "Province/State";
const COUNTRY: &str = "Country/Region";
const DATE: &str = "Date";
const CONFIRMED: &str = "Confirmed";
const DEATHS: &str = "Deaths";
const RECOVERED: &str = "Recovered";
const ACTIVE: &str = "Active";
const LATITUDE: &str = "Lat";
const LONGITUDE: &str = "Long";

/// Columns the input file must provide; any others are ignored
pub const REQUIRED_COLUMNS: [&str; 9] = [
    REGION, COUNTRY, DATE, CONFIRMED, DEATHS, RECOVERED, ACTIVE, LATITUDE, LONGITUDE,
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Header positions of the required columns
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    region: usize,
    country: usize,
    date: usize,
    confirmed: usize,
    deaths: usize,
    recovered: usize,
    active: usize,
    latitude: usize,
    longitude: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|name| find(*name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        let position = |name: &str| {
            find(name).ok_or_else(|| DatasetError::MissingColumns(vec![name.to_string()]))
        };

        Ok(Self {
            region: position(REGION)?,
            country: position(COUNTRY)?,
            date: position(DATE)?,
            confirmed: position(CONFIRMED)?,
            deaths: position(DEATHS)?,
            recovered: position(RECOVERED)?,
            active: position(ACTIVE)?,
            latitude: position(LATITUDE)?,
            longitude: position(LONGITUDE)?,
        })
    }
}

/// Loads raw records from a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvDatasetLoader {
    path: PathBuf,
}

impl CsvDatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the file
    pub fn load_records(&self) -> Result<Vec<RawRecord>, DatasetError> {
        let file = File::open(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;

        read_records(BufReader::new(file))
    }

    /// Read and aggregate the file into the shared dataset
    pub fn load(&self) -> Result<Dataset, DatasetError> {
        let records = self.load_records()?;
        let dataset = Dataset::from_raw(&records);

        info!(
            path = %self.path.display(),
            raw_records = records.len(),
            aggregated_records = dataset.len(),
            countries = dataset.country_count(),
            latest_date = ?dataset.latest_date(),
            "Dataset loaded"
        );

        Ok(dataset)
    }
}

/// Parse raw records from any CSV source.
///
/// Rows without a country cannot be grouped and are skipped. Blank regions
/// become "Unknown"; blank counts are read as zero.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let country = field(&row, columns.country);
        if country.is_empty() {
            skipped += 1;
            continue;
        }

        let counts = CaseCounts::new(
            parse_count(&row, columns.confirmed, CONFIRMED, line)?,
            parse_count(&row, columns.deaths, DEATHS, line)?,
            parse_count(&row, columns.recovered, RECOVERED, line)?,
            parse_count(&row, columns.active, ACTIVE, line)?,
        );

        let record = RawRecord::new(country, parse_date(field(&row, columns.date), line)?, counts)
            .with_region(field(&row, columns.region))
            .with_coordinates(
                parse_coordinate(&row, columns.latitude, LATITUDE, line)?,
                parse_coordinate(&row, columns.longitude, LONGITUDE, line)?,
            );

        records.push(record);
    }

    if skipped > 0 {
        warn!(skipped, "Skipped rows without a country");
    }

    Ok(records)
}

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or_default()
}

fn parse_date(value: &str, line: u64) -> Result<NaiveDate, DatasetError> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| DatasetError::InvalidDate {
            line,
            value: value.to_string(),
        })
}

/// Whole counts; integral floats such as `12.0` are accepted
fn parse_count(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    line: u64,
) -> Result<i64, DatasetError> {
    let value = field(row, idx);
    if value.is_empty() {
        return Ok(0);
    }

    if let Ok(n) = value.parse::<i64>() {
        return Ok(n);
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(DatasetError::InvalidNumber {
            line,
            column,
            value: value.to_string(),
        }),
    }
}

fn parse_coordinate(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    line: u64,
) -> Result<Option<f64>, DatasetError> {
    let value = field(row, idx);
    if value.is_empty() {
        return Ok(None);
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Some(f)),
        _ => Err(DatasetError::InvalidNumber {
            line,
            column,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNKNOWN_REGION;

    const HEADER: &str =
        "Province/State,Country/Region,Lat,Long,Date,Confirmed,Deaths,Recovered,Active,WHO Region\n";

    fn parse(body: &str) -> Result<Vec<RawRecord>, DatasetError> {
        read_records(format!("{}{}", HEADER, body).as_bytes())
    }

    #[test]
    fn test_reads_records() {
        let records = parse(
            ",Afghanistan,33.93911,67.709953,2020-01-22,0,0,0,0,Eastern Mediterranean\n\
             Ontario,Canada,51.2538,-85.3232,2020-01-23,3,1,0,2,Americas\n",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region, UNKNOWN_REGION);
        assert_eq!(records[0].country, "Afghanistan");
        assert_eq!(records[0].latitude, Some(33.93911));

        assert_eq!(records[1].region, "Ontario");
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2020, 1, 23).unwrap());
        assert_eq!(records[1].counts, CaseCounts::new(3, 1, 0, 2));
    }

    #[test]
    fn test_accepts_columns_in_any_order() {
        let csv = "Date,Confirmed,Deaths,Recovered,Active,Lat,Long,Country/Region,Province/State\n\
                   1/22/20,5,0,1,4,10.0,20.0,Chad,\n";
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "Chad");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2020, 1, 22).unwrap());
    }

    #[test]
    fn test_missing_columns_are_fatal() {
        let csv = "Country/Region,Date,Confirmed\nChad,2020-01-22,1\n";
        let err = read_records(csv.as_bytes()).unwrap_err();

        match err {
            DatasetError::MissingColumns(missing) => {
                assert_eq!(
                    missing,
                    vec!["Province/State", "Deaths", "Recovered", "Active", "Lat", "Long"]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_date_is_fatal() {
        let err = parse(",Chad,1,1,not-a-date,1,0,0,1,Africa\n").unwrap_err();
        assert!(matches!(err, DatasetError::InvalidDate { line: 2, .. }));
    }

    #[test]
    fn test_invalid_number_is_fatal() {
        let err = parse(",Chad,1,1,2020-01-22,lots,0,0,1,Africa\n").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidNumber {
                column: "Confirmed",
                ..
            }
        ));
    }

    #[test]
    fn test_blank_and_float_counts() {
        let records = parse(",Chad,,,2020-01-22,12.0,,0,-3,Africa\n").unwrap();

        assert_eq!(records[0].counts, CaseCounts::new(12, 0, 0, -3));
        assert_eq!(records[0].latitude, None);
        assert_eq!(records[0].longitude, None);

        assert!(parse(",Chad,1,1,2020-01-22,12.5,0,0,1,Africa\n").is_err());
    }

    #[test]
    fn test_rows_without_country_are_skipped() {
        let records = parse(
            "Somewhere,,1,1,2020-01-22,1,0,0,1,Africa\n\
             ,Chad,1,1,2020-01-22,1,0,0,1,Africa\n",
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "Chad");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let loader = CsvDatasetLoader::new("does/not/exist.csv");
        let err = loader.load().unwrap_err();

        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn test_empty_file_with_headers_yields_empty_dataset() {
        let records = read_records(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
        assert!(Dataset::from_raw(&records).is_empty());
    }
}
