//! Date-level rollup of the `(date, vaccine)` rows.

use chrono::NaiveDate;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::algorithm::doses::VaccineDoseRow;
use crate::catalog::RegimenKind;
use crate::error::Result;
use crate::error::util::checked_sum;
use crate::models::DoseOrdinal;

/// Daily totals over every vaccine given on one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAggregate {
    pub date: NaiveDate,
    /// Distinct canonical vaccine names, sorted
    pub vaccines: SmallVec<[String; 4]>,
    pub people_vaccinated: u64,
    pub people_fully_vaccinated: u64,
    pub people_boosted_1: u64,
    pub people_boosted_2: u64,
    /// Completions of single-dose vaccines synthesized by inference
    pub single_dose_completions: u64,
    /// Sum of the per-vaccine `total_vaccinations`
    pub total_vaccinations: u64,
}

impl DateAggregate {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            vaccines: SmallVec::new(),
            people_vaccinated: 0,
            people_fully_vaccinated: 0,
            people_boosted_1: 0,
            people_boosted_2: 0,
            single_dose_completions: 0,
            total_vaccinations: 0,
        }
    }

    /// Vaccine names joined the way the artifact carries them
    #[must_use]
    pub fn vaccine_list(&self) -> String {
        self.vaccines.iter().join(", ")
    }

    fn absorb(&mut self, row: &VaccineDoseRow) -> Result<()> {
        let date = self.date;
        let context = move || format!("rolling up {date}");
        let doses = &row.doses;

        self.people_vaccinated =
            checked_sum(self.people_vaccinated, doses.count(DoseOrdinal::First), context)?;
        self.people_fully_vaccinated = checked_sum(
            self.people_fully_vaccinated,
            doses.count(DoseOrdinal::Second),
            context,
        )?;
        self.people_boosted_1 = checked_sum(
            self.people_boosted_1,
            doses.count(DoseOrdinal::FirstBooster),
            context,
        )?;
        self.people_boosted_2 = checked_sum(
            self.people_boosted_2,
            doses.count(DoseOrdinal::SecondBooster),
            context,
        )?;
        if row.regimen == RegimenKind::SingleDose {
            self.single_dose_completions = checked_sum(
                self.single_dose_completions,
                doses.count(DoseOrdinal::Second),
                context,
            )?;
        }
        self.total_vaccinations = checked_sum(
            self.total_vaccinations,
            row.total_vaccinations.unwrap_or(0),
            context,
        )?;
        self.vaccines.push(row.vaccine.clone());
        Ok(())
    }
}

/// One aggregate per distinct date, ascending
///
/// Rows are expected to carry their totals already (see
/// [`apply_total_vaccinations`](super::apply_total_vaccinations)).
pub fn rollup_by_date(rows: &[VaccineDoseRow]) -> Result<Vec<DateAggregate>> {
    let mut sorted: Vec<&VaccineDoseRow> = rows.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.vaccine.cmp(&b.vaccine)));

    let mut aggregates = Vec::new();
    for (date, group) in &sorted.into_iter().chunk_by(|row| row.date) {
        let mut aggregate = DateAggregate::new(date);
        for row in group {
            aggregate.absorb(row)?;
        }
        aggregate.vaccines.sort();
        aggregate.vaccines.dedup();
        aggregates.push(aggregate);
    }

    log::debug!("Rolled up {} rows into {} dates", rows.len(), aggregates.len());
    Ok(aggregates)
}
