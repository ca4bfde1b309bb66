//! Single-dose regimen inference
//!
//! Single-dose products never record a completion dose, while the rollup
//! reports completions from the second slot. For those products the
//! completion count is the first-dose count.

use crate::algorithm::doses::VaccineDoseRow;
use crate::catalog::RegimenKind;
use crate::models::DoseOrdinal;

/// Fill the completion slot of a single-dose row from its first-dose slot
#[must_use]
pub fn infer_completions(mut row: VaccineDoseRow) -> VaccineDoseRow {
    match row.regimen {
        RegimenKind::SingleDose => {
            let first = row.doses.get(DoseOrdinal::First);
            row.doses.set(DoseOrdinal::Second, first);
            row
        }
        RegimenKind::MultiDose => row,
    }
}

/// Apply [`infer_completions`] to every row
#[must_use]
pub fn infer_single_dose_completions(rows: Vec<VaccineDoseRow>) -> Vec<VaccineDoseRow> {
    rows.into_iter().map(infer_completions).collect()
}
