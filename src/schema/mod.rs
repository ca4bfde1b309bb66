//! Module for checking the column layout of source tables.
//!
//! Each pipeline variant expects one fixed column sequence. The check is exact:
//! extra, missing, reordered or renamed columns all fail.

use arrow::record_batch::RecordBatch;
use arrow_schema::Schema;

use crate::error::{Error, Result};

pub mod columns;
pub mod date_utils;

pub use columns::{ColumnSchema, REGISTRATIONS, VACCINATIONS};
pub use date_utils::{DateFormatConfig, parse_date_string};

/// A struct that describes how an actual column list differs from the expected one
#[derive(Debug, Default)]
pub struct SchemaCompatibilityReport {
    /// Whether the column lists are identical
    pub compatible: bool,
    /// List of incompatibility issues, if any
    pub issues: Vec<SchemaIssue>,
}

/// A column layout issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssue {
    /// An expected column is absent
    Missing(String),
    /// A column is present but not expected
    Unexpected(String),
    /// A column is present but at a different position
    Moved {
        column: String,
        expected: usize,
        actual: usize,
    },
}

/// Column names of an Arrow schema, in order
#[must_use]
pub fn column_names(schema: &Schema) -> Vec<String> {
    schema.fields().iter().map(|f| f.name().clone()).collect()
}

/// Checks that a batch carries exactly the expected column sequence
pub fn check_columns(batch: &RecordBatch, expected: &ColumnSchema) -> Result<()> {
    let actual = column_names(&batch.schema());
    let report = describe_column_mismatch(expected.columns, &actual);
    if report.compatible {
        return Ok(());
    }

    for issue in &report.issues {
        log::warn!("{} schema: {issue:?}", expected.name);
    }

    Err(Error::SchemaMismatch {
        expected: expected.column_names(),
        actual,
    })
}

/// Finds the individual differences between an expected and an actual column list
#[must_use]
pub fn describe_column_mismatch(expected: &[&str], actual: &[String]) -> SchemaCompatibilityReport {
    let mut issues = Vec::new();

    for (position, column) in expected.iter().enumerate() {
        match actual.iter().position(|a| a == column) {
            None => issues.push(SchemaIssue::Missing((*column).to_string())),
            Some(found) if found != position => issues.push(SchemaIssue::Moved {
                column: (*column).to_string(),
                expected: position,
                actual: found,
            }),
            Some(_) => {}
        }
    }

    issues.extend(
        actual
            .iter()
            .filter(|a| !expected.contains(&a.as_str()))
            .map(|a| SchemaIssue::Unexpected(a.clone())),
    );

    SchemaCompatibilityReport {
        compatible: issues.is_empty() && expected.len() == actual.len(),
        issues,
    }
}
