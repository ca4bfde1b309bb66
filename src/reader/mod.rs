//! Module for reading delimited source files into Arrow record batches.
//!
//! The header line defines the columns. Every column is read as nullable text
//! so that the column layout can be checked before any value is interpreted.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::record_batch::RecordBatch;

use crate::error::util::safe_open_file;
use crate::error::{Error, Result};
use crate::schema::columns::text_schema;
use crate::utils::logging::{ReadProgress, log_empty_source, log_read_complete, log_read_start};

/// Split a header line into column names
///
/// Surrounding quotes, whitespace and a UTF-8 byte order mark are removed.
#[must_use]
pub fn parse_header(line: &str) -> Vec<String> {
    let line = line.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Vec::new();
    }

    line.split(',')
        .map(|name| name.trim().trim_matches('"').to_string())
        .collect()
}

/// Read a delimited file into a single record batch
///
/// # Arguments
/// * `path` - Path to the source file
/// * `batch_size` - Rows per read batch
/// * `show_progress` - Show a spinner while reading
pub fn read_delimited(path: &Path, batch_size: usize, show_progress: bool) -> Result<RecordBatch> {
    let start = Instant::now();
    log_read_start(path);

    let file = safe_open_file(path)?;
    let progress = ReadProgress::new(show_progress, &path.display().to_string());
    let batch = read_delimited_from(BufReader::new(file), batch_size, &progress);
    progress.finish();
    let batch = batch?;

    if batch.num_rows() == 0 {
        log_empty_source(path);
    }
    log_read_complete(path, batch.num_rows(), start.elapsed());
    Ok(batch)
}

/// Read delimited text with a header line from any buffered reader
pub fn read_delimited_from<R: BufRead>(
    mut input: R,
    batch_size: usize,
    progress: &ReadProgress,
) -> Result<RecordBatch> {
    let mut header = String::new();
    input
        .read_line(&mut header)
        .map_err(|e| Error::io("<header>", e))?;

    let schema = Arc::new(text_schema(&parse_header(&header)));
    if schema.fields().is_empty() {
        return Ok(RecordBatch::new_empty(schema));
    }

    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(false)
        .with_batch_size(batch_size.max(1))
        .build(input)?;

    let mut batches = Vec::new();
    for batch in reader {
        let batch = batch?;
        progress.advance(batch.num_rows());
        batches.push(batch);
    }

    log::debug!("Concatenating {} read batches", batches.len());
    Ok(concat_batches(&schema, &batches)?)
}
