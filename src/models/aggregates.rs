//! Row types of the published artifacts
//!
//! Dates are carried in their published `YYYY-MM-DD` text form.

use serde::{Deserialize, Serialize};

use crate::models::traits::ToRecordBatch;

/// Cumulative doses per vaccine and date (`by_manufacturer`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRow {
    pub date: String,
    pub vaccine: String,
    pub total_vaccinations: u64,
}

/// Doses per region (`by_region`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRow {
    pub region: String,
    pub total_vaccinations: u64,
}

/// One row of the global aggregation (`aggregation`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalAggregateRow {
    pub date: String,
    /// Sorted canonical names of the vaccines given that day, joined by `", "`
    pub vaccine: String,
    pub people_vaccinated: u64,
    pub people_fully_vaccinated: u64,
    pub people_boosted_1: u64,
    pub people_boosted_2: u64,
    pub total_vaccinations: u64,
}

/// Registrations per date (`registrations_by_date`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationsByDateRow {
    pub date: String,
    pub total_registrations: u64,
}

/// Registrations per region (`registrations_by_region`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationsByRegionRow {
    pub region: String,
    pub total_registrations: u64,
}

impl ToRecordBatch for ManufacturerRow {}
impl ToRecordBatch for RegionRow {}
impl ToRecordBatch for GlobalAggregateRow {}
impl ToRecordBatch for RegistrationsByDateRow {}
impl ToRecordBatch for RegistrationsByRegionRow {}
