//! Collapse dose events into a `(date, vaccine) × dose ordinal` matrix.

use chrono::NaiveDate;

use crate::algorithm::doses::VaccineDoseRow;
use crate::algorithm::matrix::SparseMatrix;
use crate::catalog::VaccineCatalog;
use crate::error::Result;
use crate::models::{DoseEvent, DoseOrdinal};

/// Sum dose counts per `(date, vaccine)` and dose ordinal
pub fn dose_matrix(events: &[DoseEvent]) -> Result<SparseMatrix<(NaiveDate, String), DoseOrdinal>> {
    let mut matrix = SparseMatrix::new();
    for event in events {
        matrix.add(
            (event.date, event.vaccine.clone()),
            event.dose_ordinal,
            event.dose_count,
        )?;
    }
    Ok(matrix)
}

/// One row per `(date, vaccine)`, ordered by date then vaccine
///
/// Ordinals without events stay `None` until inference has run.
pub fn aggregate_by_date_vaccine(
    events: &[DoseEvent],
    catalog: &VaccineCatalog,
) -> Result<Vec<VaccineDoseRow>> {
    let matrix = dose_matrix(events)?;
    log::debug!(
        "Aggregated {} events into {} date/vaccine rows",
        events.len(),
        matrix.row_count()
    );

    Ok(matrix
        .rows()
        .map(|((date, vaccine), cells)| {
            let mut row = VaccineDoseRow::new(*date, vaccine.clone(), catalog.regimen(vaccine));
            for (ordinal, count) in cells {
                row.doses.set(*ordinal, Some(*count));
            }
            row
        })
        .collect())
}
