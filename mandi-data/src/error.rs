/// Error types for reference data parsing
use thiserror::Error;

/// Main error type for reference data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required CSV column was missing or empty
    #[error("Missing field '{0}' in CSV record")]
    MissingField(&'static str),

    /// A numeric CSV field failed to parse
    #[error("Invalid numeric value for '{field}': {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// A store coordinate was outside the legal range
    #[error("Coordinate '{field}' out of range: {value}")]
    CoordinateOutOfRange { field: &'static str, value: f64 },

    /// Chart series labels and values differ in length
    #[error("Series length mismatch: {labels} labels vs {values} values")]
    SeriesLengthMismatch { labels: usize, values: usize },

    /// A commodity name was not one of the known set
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
