use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Embedded CSV for the historical price series (Jan through Jun).
pub static PRICE_HISTORY_CSV: &str = include_str!("../../fixtures/price_history.csv");

/// Embedded CSV for the forecast price series (Jul through Dec).
pub static PRICE_FORECAST_CSV: &str = include_str!("../../fixtures/price_forecast.csv");

/// An ordered sequence of period labels with one value per label.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    /// Build a series, enforcing that labels and values have equal length.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<ChartSeries> {
        if labels.len() != values.len() {
            return Err(DataError::SeriesLengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(ChartSeries { labels, values })
    }

    /// The fixed historical price series from the embedded CSV.
    pub fn price_history() -> ChartSeries {
        match ChartSeries::parse_series_csv(PRICE_HISTORY_CSV) {
            Ok(series) => series,
            Err(e) => panic!("failed to parse embedded price history csv: {e}"),
        }
    }

    /// The fixed forecast price series from the embedded CSV.
    pub fn price_forecast() -> ChartSeries {
        match ChartSeries::parse_series_csv(PRICE_FORECAST_CSV) {
            Ok(series) => series,
            Err(e) => panic!("failed to parse embedded price forecast csv: {e}"),
        }
    }

    /// Parse a `period,value` CSV string (with headers) into a series.
    pub fn parse_series_csv(csv_object: &str) -> Result<ChartSeries> {
        let mut labels = Vec::new();
        let mut values = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let period = record
                .get(0)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DataError::MissingField("period"))?;
            let raw_value = record
                .get(1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DataError::MissingField("value"))?;
            let value: f64 = raw_value.parse().map_err(|_| DataError::InvalidNumber {
                field: "value",
                value: raw_value.to_string(),
            })?;
            labels.push(period.to_string());
            values.push(value);
        }
        ChartSeries::new(labels, values)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of (label, value) points in the series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over (label, value) pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::ChartSeries;

    #[test]
    fn test_fixed_series_have_six_points() {
        assert_eq!(ChartSeries::price_history().len(), 6);
        assert_eq!(ChartSeries::price_forecast().len(), 6);
    }

    #[test]
    fn test_price_history_contents() {
        let series = ChartSeries::price_history();
        assert_eq!(series.labels(), ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(series.values(), [10.0, 20.0, 15.0, 25.0, 20.0, 30.0]);
    }

    #[test]
    fn test_price_forecast_contents() {
        let series = ChartSeries::price_forecast();
        assert_eq!(series.labels(), ["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]);
        assert_eq!(series.values(), [12.0, 18.0, 14.0, 22.0, 19.0, 28.0]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = ChartSeries::new(vec!["Jan".to_string()], vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_points_pair_labels_with_values() {
        let series = ChartSeries::price_history();
        let first = series.points().next().unwrap();
        assert_eq!(first, ("Jan", 10.0));
    }
}
