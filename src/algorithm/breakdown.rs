//! Lateral breakdowns computed directly from reconciled events
//!
//! These do not go through the dose matrix. Events without a region are left
//! out of every region-keyed breakdown.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::algorithm::matrix::{DenseMatrix, SparseMatrix};
use crate::error::Result;
use crate::error::util::checked_sum;
use crate::models::{DoseEvent, ManufacturerRow, RegionRow, RegionalEvent};
use crate::schema::date_utils::format_date;

/// Cumulative dose counts per vaccine over ascending dates
pub fn breakdown_per_vaccine(events: &[DoseEvent]) -> Result<Vec<ManufacturerRow>> {
    let mut daily = SparseMatrix::new();
    for event in events {
        daily.add(event.date, event.vaccine.as_str(), event.dose_count)?;
    }

    let mut running: FxHashMap<&str, u64> = FxHashMap::default();
    let mut rows = Vec::new();
    for (date, vaccines) in daily.rows() {
        for (vaccine, count) in vaccines {
            let total = running.entry(*vaccine).or_insert(0);
            *total = checked_sum(*total, *count, || format!("accumulating {vaccine}"))?;
            rows.push(ManufacturerRow {
                date: format_date(*date),
                vaccine: (*vaccine).to_string(),
                total_vaccinations: *total,
            });
        }
    }

    Ok(rows)
}

/// Dose counts per region, sorted by region name
pub fn breakdown_per_region(events: &[DoseEvent]) -> Result<Vec<RegionRow>> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for event in events {
        if let Some(region) = event.region() {
            let total = totals.entry(region).or_insert(0);
            *total = checked_sum(*total, event.dose_count, || format!("summing {region}"))?;
        }
    }

    Ok(totals
        .into_iter()
        .map(|(region, total_vaccinations)| RegionRow {
            region: region.to_string(),
            total_vaccinations,
        })
        .collect())
}

/// Number of events per date, ascending
#[must_use]
pub fn count_per_date<E: RegionalEvent>(events: &[E]) -> Vec<(NaiveDate, u64)> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events {
        *counts.entry(event.date()).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Number of events per region, sorted by region name
#[must_use]
pub fn count_per_region<E: RegionalEvent>(events: &[E]) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for event in events.iter() {
        if let Some(region) = event.region() {
            *counts.entry(region).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(region, count)| (region.to_string(), count))
        .collect()
}

/// Date × region pivot of event counts, zero-filled, region columns sorted
pub fn breakdown_per_date_and_region<E: RegionalEvent>(
    events: &[E],
) -> Result<DenseMatrix<NaiveDate, String>> {
    let mut matrix = SparseMatrix::new();
    for event in events {
        if let Some(region) = event.region() {
            matrix.add(event.date(), region.to_string(), 1)?;
        }
    }
    Ok(matrix.to_dense())
}
