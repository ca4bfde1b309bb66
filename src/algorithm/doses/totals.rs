//! Regimen-aware `total_vaccinations` per `(date, vaccine)` row.

use crate::algorithm::doses::VaccineDoseRow;
use crate::catalog::RegimenKind;
use crate::error::Result;
use crate::error::util::checked_sum;
use crate::models::DoseOrdinal;

/// Completed-regimen count of a row
///
/// Single-dose vaccines count their first doses only, so an inferred
/// completion slot is never counted twice. Missing slots read as zero.
pub fn total_vaccinations(row: &VaccineDoseRow) -> Result<u64> {
    let first = row.doses.count(DoseOrdinal::First);
    match row.regimen {
        RegimenKind::SingleDose => Ok(first),
        RegimenKind::MultiDose => checked_sum(first, row.doses.count(DoseOrdinal::Second), || {
            format!("totalling {} on {}", row.vaccine, row.date)
        }),
    }
}

/// Store [`total_vaccinations`] on every row
pub fn apply_total_vaccinations(rows: Vec<VaccineDoseRow>) -> Result<Vec<VaccineDoseRow>> {
    rows.into_iter()
        .map(|mut row| {
            row.total_vaccinations = Some(total_vaccinations(&row)?);
            Ok(row)
        })
        .collect()
}
