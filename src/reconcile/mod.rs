//! Vaccine name reconciliation
//!
//! Rows without a vaccine label are discarded, unknown labels stop the run,
//! and every catalog label is rewritten to its canonical manufacturer name.
//! The rewrite is label-agnostic across columns: any text cell whose value is a
//! catalog label is replaced, whichever column it sits in.

use std::collections::BTreeSet;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray, StringArray};
use arrow::compute::filter_record_batch;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::catalog::VaccineCatalog;
use crate::error::Result;
use crate::utils::arrow::{extract_text, string_column};

/// Discard rows whose vaccine label is null or blank
pub fn drop_missing_vaccines(batch: &RecordBatch, vaccine_column: &str) -> Result<RecordBatch> {
    let vaccines = string_column(batch, vaccine_column)?;
    let mask: BooleanArray = (0..vaccines.len())
        .map(|row| Some(extract_text(vaccines, row).is_some()))
        .collect();

    let filtered = filter_record_batch(batch, &mask)?;
    let dropped = batch.num_rows() - filtered.num_rows();
    if dropped > 0 {
        log::info!("Dropped {dropped} rows without a vaccine label");
    }
    Ok(filtered)
}

/// Distinct vaccine labels present in a batch, sorted
pub fn distinct_labels<'a>(batch: &'a RecordBatch, vaccine_column: &str) -> Result<BTreeSet<&'a str>> {
    let vaccines = string_column(batch, vaccine_column)?;
    Ok((0..vaccines.len())
        .filter_map(|row| extract_text(vaccines, row))
        .collect())
}

/// Fail with `UnknownVaccine` if any label is missing from the catalog
pub fn check_vaccine_names(
    batch: &RecordBatch,
    catalog: &VaccineCatalog,
    vaccine_column: &str,
) -> Result<()> {
    let labels = distinct_labels(batch, vaccine_column)?;
    log::debug!("Found {} distinct vaccine labels", labels.len());
    catalog.check_labels(labels)
}

/// Rewrite every text cell that holds a catalog label to its canonical name
pub fn translate_vaccine_names(batch: &RecordBatch, catalog: &VaccineCatalog) -> Result<RecordBatch> {
    let columns: Vec<ArrayRef> = batch
        .columns()
        .iter()
        .map(|column| match column.data_type() {
            DataType::Utf8 => match column.as_any().downcast_ref::<StringArray>() {
                Some(text) => Arc::new(translate_array(text, catalog)) as ArrayRef,
                None => Arc::clone(column),
            },
            _ => Arc::clone(column),
        })
        .collect();

    Ok(RecordBatch::try_new(batch.schema(), columns)?)
}

fn translate_array(array: &StringArray, catalog: &VaccineCatalog) -> StringArray {
    array
        .iter()
        .map(|value| value.map(|s| catalog.canonical_name(s.trim()).unwrap_or(s)))
        .collect()
}

/// Drop unlabeled rows, reject unknown labels and canonicalize the rest
pub fn reconcile_vaccine_names(
    batch: &RecordBatch,
    catalog: &VaccineCatalog,
    vaccine_column: &str,
) -> Result<RecordBatch> {
    let labelled = drop_missing_vaccines(batch, vaccine_column)?;
    check_vaccine_names(&labelled, catalog, vaccine_column)?;
    translate_vaccine_names(&labelled, catalog)
}
