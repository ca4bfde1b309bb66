//! Utilities for working with Arrow arrays.
//!
//! This module provides utility functions for safely looking up and
//! downcasting columns of a record batch.

use arrow::array::{Array, ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};

/// Get a column from a record batch by name
///
/// # Errors
///
/// Returns `ColumnNotFound` when the batch has no column with that name
pub fn get_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a ArrayRef> {
    batch
        .schema()
        .index_of(column_name)
        .map(|idx| batch.column(idx))
        .map_err(|_| Error::ColumnNotFound {
            column: column_name.to_string(),
        })
}

/// Downcast an array to a concrete Arrow array type
///
/// # Arguments
///
/// * `array` - The array to downcast
/// * `column_name` - The column name, for error messages
/// * `type_name` - The expected type name, for error messages
pub fn downcast_array<'a, T: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    type_name: &str,
) -> Result<&'a T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        Error::invalid_record(
            0,
            column_name,
            format!("expected {type_name} column, found {}", array.data_type()),
        )
    })
}

/// Get a text column from a record batch
pub fn string_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a StringArray> {
    let array = get_column(batch, column_name)?;
    downcast_array::<StringArray>(array, column_name, "Utf8")
}
