//! Error handling for the vaccination aggregate pipelines.
//!
//! Every variant is fatal: the pipelines fail fast and never emit partial
//! artifacts once a stage has rejected its input.

use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use chrono::NaiveDate;
use parquet::errors::ParquetError;

pub mod util;

/// Specialized error type for the aggregation pipelines
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input table does not carry the expected column sequence
    #[error("Wrong columns. Was expecting {expected:?} and got {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// The input contains vaccine labels that are absent from the catalog
    #[error("Found unknown vaccines: {labels:?}")]
    UnknownVaccine { labels: BTreeSet<String> },

    /// The earliest output date differs from the campaign start
    #[error("Expected the first date to be {expected}, encountered {}", describe_date(.found))]
    UnexpectedStartDate {
        expected: NaiveDate,
        found: Option<NaiveDate>,
    },

    /// A cell could not be decoded into its typed value
    #[error("Invalid value {value:?} in column '{column}' at row {row}")]
    InvalidRecord {
        row: usize,
        column: String,
        value: String,
    },

    /// A column required by a pipeline stage is not present
    #[error("Column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Dates were not strictly increasing right before a cumulative fold
    #[error("Dates must be strictly increasing before accumulation: {current} follows {previous}")]
    UnorderedDates { previous: String, current: String },

    /// The rolled-up total disagrees with the per-vaccine totals
    #[error(
        "Inconsistent total_vaccinations on {date}: per-vaccine sum is {per_vaccine}, named columns give {recomputed}"
    )]
    InconsistentTotals {
        date: String,
        per_vaccine: u64,
        recomputed: u64,
    },

    /// A dose count summation left the 64-bit range
    #[error("Dose count overflow while {context}")]
    CountOverflow { context: String },

    /// A pipeline was run without the source it reads
    #[error("No {0} source configured")]
    MissingSource(&'static str),

    /// IO error with the path that caused it
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Conversion between rows and record batches failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an IO error together with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an `InvalidRecord` error for a cell
    pub fn invalid_record(row: usize, column: &str, value: impl Into<String>) -> Self {
        Self::InvalidRecord {
            row,
            column: column.to_string(),
            value: value.into(),
        }
    }

    /// Build a `CountOverflow` error
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::CountOverflow {
            context: context.into(),
        }
    }
}

fn describe_date(date: &Option<NaiveDate>) -> String {
    date.map_or_else(|| "no dates".to_string(), |d| d.to_string())
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
