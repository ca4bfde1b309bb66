//! Dose-level aggregation
//!
//! The global aggregation runs through these stages in order:
//!
//! 1. [`aggregator`] collapses events into one row per `(date, vaccine)` with a
//!    count slot per dose ordinal.
//! 2. [`inference`] fills the completion slot of single-dose vaccines.
//! 3. [`totals`] computes the regimen-aware `total_vaccinations` of each row.
//! 4. [`rollup`] reduces the rows to one aggregate per date.
//! 5. [`cumulative`] turns daily values into running totals.

use chrono::NaiveDate;

use crate::catalog::RegimenKind;
use crate::models::DoseOrdinal;

pub mod aggregator;
pub mod cumulative;
pub mod inference;
pub mod rollup;
pub mod totals;

pub use aggregator::{aggregate_by_date_vaccine, dose_matrix};
pub use cumulative::{enrich_cumulative_sums, ensure_strictly_increasing};
pub use inference::{infer_completions, infer_single_dose_completions};
pub use rollup::{DateAggregate, rollup_by_date};
pub use totals::{apply_total_vaccinations, total_vaccinations};

/// Dose counts per ordinal; `None` means no event with that ordinal was recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoseSlots([Option<u64>; 4]);

impl DoseSlots {
    /// Recorded count for an ordinal
    #[must_use]
    pub const fn get(&self, ordinal: DoseOrdinal) -> Option<u64> {
        self.0[ordinal.index()]
    }

    /// Count for an ordinal with missing cells read as zero
    #[must_use]
    pub fn count(&self, ordinal: DoseOrdinal) -> u64 {
        self.get(ordinal).unwrap_or(0)
    }

    /// Overwrite the cell of an ordinal
    pub fn set(&mut self, ordinal: DoseOrdinal, value: Option<u64>) {
        self.0[ordinal.index()] = value;
    }
}

/// Summed dose counts of one vaccine on one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineDoseRow {
    pub date: NaiveDate,
    /// Canonical vaccine name
    pub vaccine: String,
    pub regimen: RegimenKind,
    pub doses: DoseSlots,
    /// Regimen-aware total, set by [`apply_total_vaccinations`]
    pub total_vaccinations: Option<u64>,
}

impl VaccineDoseRow {
    /// Row with no recorded doses
    #[must_use]
    pub fn new(date: NaiveDate, vaccine: impl Into<String>, regimen: RegimenKind) -> Self {
        Self {
            date,
            vaccine: vaccine.into(),
            regimen,
            doses: DoseSlots::default(),
            total_vaccinations: None,
        }
    }

    /// Set the count of one ordinal
    #[must_use]
    pub fn with_doses(mut self, ordinal: DoseOrdinal, count: u64) -> Self {
        self.doses.set(ordinal, Some(count));
        self
    }
}
