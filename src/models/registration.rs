//! Registration for a vaccination slot

use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::traits::{RecordAdapter, RegionalEvent};
use crate::schema::DateFormatConfig;
use crate::schema::columns::{AGE_GROUP, DATE, REGION, REGION_CODE, SITE_ID};
use crate::utils::arrow::{extract_date, extract_text, string_column};

/// One row of the registrations feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Registration date
    pub date: NaiveDate,
    /// Vaccination site identifier
    pub site_id: Option<String>,
    /// Region name
    pub region: Option<String>,
    /// Region NUTS code
    pub region_code: Option<String>,
    /// Age group of the registered person
    pub age_group: Option<String>,
}

impl RecordAdapter for Registration {
    fn from_record_batch(batch: &RecordBatch, dates: &DateFormatConfig) -> Result<Vec<Self>> {
        let date_col = string_column(batch, DATE)?;
        let sites = string_column(batch, SITE_ID)?;
        let regions = string_column(batch, REGION)?;
        let region_codes = string_column(batch, REGION_CODE)?;
        let age_groups = string_column(batch, AGE_GROUP)?;

        (0..batch.num_rows())
            .map(|row| -> Result<Self> {
                Ok(Self {
                    date: extract_date(date_col, row, DATE, dates)?,
                    site_id: extract_text(sites, row).map(str::to_string),
                    region: extract_text(regions, row).map(str::to_string),
                    region_code: extract_text(region_codes, row).map(str::to_string),
                    age_group: extract_text(age_groups, row).map(str::to_string),
                })
            })
            .collect()
    }
}

impl RegionalEvent for Registration {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
