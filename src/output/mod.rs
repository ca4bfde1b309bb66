//! Output formatting and guards
//!
//! Turns the date-level rollup into the published rows, checks that the two
//! ways of computing `total_vaccinations` agree and that the series starts
//! at the campaign start. The [`writer`] persists finished artifacts.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::algorithm::doses::DateAggregate;
use crate::algorithm::matrix::DenseMatrix;
use crate::error::util::checked_sum;
use crate::error::{Error, Result};
use crate::models::GlobalAggregateRow;
use crate::schema::date_utils::{OUTPUT_DATE_FORMAT, format_date};

pub mod writer;

pub use writer::{artifact_path, staging_path, write_artifacts};

/// Published rows of the global aggregation, one per date
///
/// `total_vaccinations` is recomputed from the named columns, discounting the
/// completions inferred for single-dose vaccines, and must equal the sum of
/// the per-vaccine totals.
pub fn format_aggregates(aggregates: &[DateAggregate]) -> Result<Vec<GlobalAggregateRow>> {
    aggregates
        .iter()
        .map(|aggregate| -> Result<GlobalAggregateRow> {
            let date = format_date(aggregate.date);
            let recomputed = checked_sum(
                aggregate.people_vaccinated,
                aggregate.people_fully_vaccinated,
                || format!("recomputing totals on {date}"),
            )?
            .checked_sub(aggregate.single_dose_completions)
            .ok_or_else(|| Error::overflow(format!("discounting inferred completions on {date}")))?;

            if recomputed != aggregate.total_vaccinations {
                return Err(Error::InconsistentTotals {
                    date,
                    per_vaccine: aggregate.total_vaccinations,
                    recomputed,
                });
            }

            Ok(GlobalAggregateRow {
                date,
                vaccine: aggregate.vaccine_list(),
                people_vaccinated: aggregate.people_vaccinated,
                people_fully_vaccinated: aggregate.people_fully_vaccinated,
                people_boosted_1: aggregate.people_boosted_1,
                people_boosted_2: aggregate.people_boosted_2,
                total_vaccinations: recomputed,
            })
        })
        .collect()
}

/// Fail with `UnexpectedStartDate` unless the earliest date is `expected`
///
/// An empty output has no first date and fails as well.
pub fn check_first_date(rows: &[GlobalAggregateRow], expected: NaiveDate) -> Result<()> {
    let Some(first) = rows.iter().map(|row| row.date.as_str()).min() else {
        return Err(Error::UnexpectedStartDate {
            expected,
            found: None,
        });
    };

    let found = NaiveDate::parse_from_str(first, OUTPUT_DATE_FORMAT)
        .map_err(|_| Error::invalid_record(0, "date", first))?;
    if found != expected {
        return Err(Error::UnexpectedStartDate {
            expected,
            found: Some(found),
        });
    }
    Ok(())
}

/// Date × region pivot as a batch: a `date` column followed by one count
/// column per region
pub fn pivot_to_record_batch(pivot: &DenseMatrix<NaiveDate, String>) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(pivot.columns.len() + 1);
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(pivot.columns.len() + 1);

    fields.push(Field::new("date", DataType::Utf8, false));
    columns.push(Arc::new(
        pivot
            .rows
            .iter()
            .map(|date| Some(format_date(*date)))
            .collect::<StringArray>(),
    ));

    for (idx, region) in pivot.columns.iter().enumerate() {
        fields.push(Field::new(region, DataType::UInt64, false));
        columns.push(Arc::new(UInt64Array::from(pivot.column_values(idx))));
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
