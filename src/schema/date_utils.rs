//! Module for handling date parsing and formatting.

use chrono::NaiveDate;
use serde::Deserialize;

/// Output representation of every date in the artifacts
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for date format handling
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2021-01-15
                "%d.%m.%Y".to_string(), // Czech: 15.01.2021
                "%Y%m%d".to_string(),   // Compact: 20210115
            ],
            enable_format_detection: true,
        }
    }
}

/// Fixed `YYYY-MM-DD` form of a textual date: its first 10 characters
#[must_use]
pub fn truncate_date(s: &str) -> &str {
    match s.char_indices().nth(10) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Format a calendar date the way the artifacts carry it
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}

/// Parse a date string with multiple format attempts
///
/// Timestamps such as `2021-01-05T00:00:00` are accepted by looking at the
/// leading date part only.
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();

    for candidate in [s, truncate_date(s)] {
        for format in &config.date_formats {
            if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
                return Some(date);
            }
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
///
/// Only unambiguous layouts are detected: year-first slashes and the
/// day-first dotted form. `01/02/2021` could be either day or month first and
/// is rejected.
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 && parts[0].len() == 4 {
            return Some("%Y/%m/%d");
        }
        return None;
    }

    // DD.MM.YYYY
    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y");
        }
    }

    None
}
