//! Forecast command - prints the prediction table for one country

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::AppConfig;
use crate::domain::PredictionTable;
use crate::infrastructure::dataset::CsvDatasetLoader;
use crate::infrastructure::logging::init_logging;

/// Arguments for the forecast command
#[derive(Args, Clone)]
pub struct ForecastArgs {
    /// Country to forecast
    #[arg(long)]
    pub country: String,

    /// Days ahead; missing or out-of-range values fall back to 30
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// CSV dataset to load (overrides config)
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Run a one-shot forecast
pub async fn run(args: ForecastArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let path = args.data.unwrap_or(config.dataset.path);
    let dataset = CsvDatasetLoader::new(path).load()?;
    let table = dataset.predictions(&args.country, args.days)?;

    let mut stdout = io::stdout().lock();
    write_table(&mut stdout, &table)?;

    Ok(())
}

fn write_table(out: &mut impl Write, table: &PredictionTable) -> io::Result<()> {
    let rows = table.data.rows();
    let width = rows
        .iter()
        .map(|row| row.metric.len())
        .chain(table.columns.iter().map(|c| c.name.len()))
        .max()
        .unwrap_or(0);

    let header: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
    writeln!(out, "{:<width$}  {}", header[0], header[1], width = width)?;
    writeln!(out, "{}  {}", "-".repeat(width), "-".repeat(header[1].len().max(5)))?;
    for row in rows {
        writeln!(out, "{:<width$}  {}", row.metric, row.value, width = width)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Horizon, PredictionResult};

    fn render(table: &PredictionTable) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_forecast_table() {
        let peak = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
        let table = PredictionTable::from(PredictionResult::forecast(
            Horizon::normalize(Some(7)),
            1200,
            35,
            peak,
        ));

        let text = render(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Metric"));
        assert!(lines[0].ends_with("Value"));
        assert!(lines[2].starts_with("Predicted Confirmed Cases (7 Days)"));
        assert!(lines[2].ends_with("1200"));
        assert!(lines[4].ends_with("2020-05-01"));
    }

    #[test]
    fn test_write_insufficient_table() {
        let table = PredictionTable::from(PredictionResult::insufficient_data());

        let text = render(&table);
        assert!(text.contains("Insufficient Data  Predictions unavailable."));
    }
}
