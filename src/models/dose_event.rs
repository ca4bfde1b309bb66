//! Dose-level vaccination event

use std::fmt;

use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::traits::{RecordAdapter, RegionalEvent};
use crate::schema::DateFormatConfig;
use crate::schema::columns::{
    DATE, DOSE_COUNT, DOSE_ORDINAL, ID, REGION, REGION_CODE, RESIDENCE, RESIDENCE_CODE, VACCINE,
    VACCINE_CODE,
};
use crate::utils::arrow::{
    extract_count, extract_date, extract_required_text, extract_text, string_column,
};

/// Sequence number of a vaccination act for an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DoseOrdinal {
    /// First, or only, dose
    First = 1,
    /// Completion dose
    Second = 2,
    /// First booster
    FirstBooster = 3,
    /// Second booster
    SecondBooster = 4,
}

impl DoseOrdinal {
    /// All ordinals in ascending order
    pub const ALL: [Self; 4] = [
        Self::First,
        Self::Second,
        Self::FirstBooster,
        Self::SecondBooster,
    ];

    /// Convert a numeric ordinal, if it is one the feed defines
    #[must_use]
    pub const fn from_number(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::FirstBooster),
            4 => Some(Self::SecondBooster),
            _ => None,
        }
    }

    /// Zero-based slot index of this ordinal
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for DoseOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// One row of the dose-level vaccination feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseEvent {
    /// Record identifier
    pub id: Option<String>,
    /// Event date
    pub date: NaiveDate,
    /// Canonical vaccine name (after reconciliation)
    pub vaccine: String,
    /// Vaccine product code
    pub vaccine_code: Option<String>,
    /// Dose ordinal
    pub dose_ordinal: DoseOrdinal,
    /// Region name
    pub region: Option<String>,
    /// Region NUTS code
    pub region_code: Option<String>,
    /// Sub-region of residence
    pub residence: Option<String>,
    /// Sub-region of residence code
    pub residence_code: Option<String>,
    /// Number of doses the row stands for
    pub dose_count: u64,
}

impl RecordAdapter for DoseEvent {
    fn from_record_batch(batch: &RecordBatch, dates: &DateFormatConfig) -> Result<Vec<Self>> {
        let ids = string_column(batch, ID)?;
        let date_col = string_column(batch, DATE)?;
        let vaccines = string_column(batch, VACCINE)?;
        let vaccine_codes = string_column(batch, VACCINE_CODE)?;
        let ordinals = string_column(batch, DOSE_ORDINAL)?;
        let regions = string_column(batch, REGION)?;
        let region_codes = string_column(batch, REGION_CODE)?;
        let residences = string_column(batch, RESIDENCE)?;
        let residence_codes = string_column(batch, RESIDENCE_CODE)?;
        let counts = string_column(batch, DOSE_COUNT)?;

        let owned = |value: Option<&str>| value.map(str::to_string);

        (0..batch.num_rows())
            .map(|row| -> Result<Self> {
                let ordinal = extract_count(ordinals, row, DOSE_ORDINAL)?;
                let dose_ordinal = DoseOrdinal::from_number(ordinal).ok_or_else(|| {
                    Error::invalid_record(row, DOSE_ORDINAL, ordinal.to_string())
                })?;

                Ok(Self {
                    id: owned(extract_text(ids, row)),
                    date: extract_date(date_col, row, DATE, dates)?,
                    vaccine: extract_required_text(vaccines, row, VACCINE)?.to_string(),
                    vaccine_code: owned(extract_text(vaccine_codes, row)),
                    dose_ordinal,
                    region: owned(extract_text(regions, row)),
                    region_code: owned(extract_text(region_codes, row)),
                    residence: owned(extract_text(residences, row)),
                    residence_code: owned(extract_text(residence_codes, row)),
                    dose_count: extract_count(counts, row, DOSE_COUNT)?,
                })
            })
            .collect()
    }
}

impl RegionalEvent for DoseEvent {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
