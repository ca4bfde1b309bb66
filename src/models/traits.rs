//! Trait definitions for domain models
//!
//! These traits sit at the seams between Arrow record batches and the typed
//! rows the aggregation stages work on.

use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::Result;
use crate::schema::DateFormatConfig;

/// A trait for source records decoded from a text `RecordBatch`
pub trait RecordAdapter: Sized {
    /// Convert a `RecordBatch` of text columns to typed records
    ///
    /// # Errors
    ///
    /// Fails with `InvalidRecord` on the first cell that cannot be decoded
    fn from_record_batch(batch: &RecordBatch, dates: &DateFormatConfig) -> Result<Vec<Self>>;
}

/// A trait for artifact rows that are published as a `RecordBatch`
pub trait ToRecordBatch: Serialize + DeserializeOwned + Sized {
    /// Arrow fields traced from the row type
    fn fields() -> Result<Vec<FieldRef>> {
        Ok(Vec::<FieldRef>::from_type::<Self>(TracingOptions::default())?)
    }

    /// Convert rows to a `RecordBatch` with one column per field
    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let fields = Self::fields()?;
        Ok(serde_arrow::to_record_batch(&fields, &rows)?)
    }
}

/// An event that happened on a date, possibly in a known region
pub trait RegionalEvent {
    /// Date of the event
    fn date(&self) -> NaiveDate;

    /// Region name, if the source recorded one
    fn region(&self) -> Option<&str>;
}
