//! Field extraction utilities for Arrow text columns
//!
//! Source feeds are read with every column as text; these helpers decode
//! single cells into typed values and report the offending cell on failure.

use arrow::array::{Array, StringArray};
use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::schema::{DateFormatConfig, parse_date_string};

/// Extract a text value, treating null and blank cells as missing
#[must_use]
pub fn extract_text(array: &StringArray, row: usize) -> Option<&str> {
    if row >= array.len() || array.is_null(row) {
        return None;
    }

    let value = array.value(row).trim();
    if value.is_empty() { None } else { Some(value) }
}

/// Extract a text value that must be present
pub fn extract_required_text<'a>(
    array: &'a StringArray,
    row: usize,
    column_name: &str,
) -> Result<&'a str> {
    extract_text(array, row).ok_or_else(|| Error::invalid_record(row, column_name, ""))
}

/// Extract a calendar date from a text cell
pub fn extract_date(
    array: &StringArray,
    row: usize,
    column_name: &str,
    config: &DateFormatConfig,
) -> Result<NaiveDate> {
    let raw = extract_required_text(array, row, column_name)?;
    parse_date_string(raw, config).ok_or_else(|| Error::invalid_record(row, column_name, raw))
}

/// Extract a non-negative integer count from a text cell
///
/// Integral floats such as `3.0` are accepted, as produced by some exports.
pub fn extract_count(array: &StringArray, row: usize, column_name: &str) -> Result<u64> {
    let raw = extract_required_text(array, row, column_name)?;
    if let Ok(value) = raw.parse::<u64>() {
        return Ok(value);
    }

    match raw.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 => {
            Ok(value as u64)
        }
        _ => Err(Error::invalid_record(row, column_name, raw)),
    }
}
