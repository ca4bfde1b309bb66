//! Registration count pipeline
//!
//! Counts registrations per date, per region and per date and region. There
//! is no catalog and no dose logic here.

use std::path::PathBuf;
use std::time::Instant;

use arrow::record_batch::RecordBatch;

use crate::algorithm::breakdown::{breakdown_per_date_and_region, count_per_date, count_per_region};
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::models::{
    RecordAdapter, Registration, RegistrationsByDateRow, RegistrationsByRegionRow, ToRecordBatch,
};
use crate::output::{pivot_to_record_batch, write_artifacts};
use crate::reader::read_delimited;
use crate::schema::date_utils::format_date;
use crate::schema::{REGISTRATIONS, check_columns};

/// Artifacts of one registrations run
#[derive(Debug, Clone)]
pub struct RegistrationArtifacts {
    /// `date, total_registrations`
    pub by_date: RecordBatch,
    /// `region, total_registrations`
    pub by_region: RecordBatch,
    /// `date` plus one count column per region
    pub by_date_and_region: RecordBatch,
}

impl RegistrationArtifacts {
    /// Artifacts paired with their published names
    #[must_use]
    pub fn named(&self) -> [(&'static str, &RecordBatch); 3] {
        [
            ("registrations_by_date", &self.by_date),
            ("registrations_by_region", &self.by_region),
            ("registrations_by_date_and_region", &self.by_date_and_region),
        ]
    }
}

/// Registration counts over one source table
#[derive(Debug, Clone)]
pub struct RegistrationPipeline {
    config: PipelineConfig,
}

impl RegistrationPipeline {
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Validate and decode the source table
    pub fn base_pipeline(&self, batch: &RecordBatch) -> Result<Vec<Registration>> {
        check_columns(batch, &REGISTRATIONS)?;
        Registration::from_record_batch(batch, &self.config.date_format_config)
    }

    /// Compute every artifact from an in-memory table
    pub fn run_batch(&self, batch: &RecordBatch) -> Result<RegistrationArtifacts> {
        let registrations = self.base_pipeline(batch)?;
        log::info!("Decoded {} registrations", registrations.len());

        let per_date: Vec<RegistrationsByDateRow> = count_per_date(&registrations)
            .into_iter()
            .map(|(date, total_registrations)| RegistrationsByDateRow {
                date: format_date(date),
                total_registrations,
            })
            .collect();
        let per_region: Vec<RegistrationsByRegionRow> = count_per_region(&registrations)
            .into_iter()
            .map(|(region, total_registrations)| RegistrationsByRegionRow {
                region,
                total_registrations,
            })
            .collect();

        Ok(RegistrationArtifacts {
            by_date: RegistrationsByDateRow::to_record_batch(&per_date)?,
            by_region: RegistrationsByRegionRow::to_record_batch(&per_region)?,
            by_date_and_region: pivot_to_record_batch(&breakdown_per_date_and_region(
                &registrations,
            )?)?,
        })
    }

    /// Read the configured source, compute the artifacts and write them
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let Some(source) = &self.config.registrations_source else {
            return Err(Error::MissingSource("registrations"));
        };

        let start = Instant::now();
        let batch = read_delimited(source, self.config.batch_size, self.config.show_progress)?;
        let artifacts = self.run_batch(&batch)?;
        let written = write_artifacts(
            &self.config.output_dir,
            self.config.output_format,
            &artifacts.named(),
        )?;

        log::info!(
            "Registration pipeline wrote {} artifacts in {:?}",
            written.len(),
            start.elapsed()
        );
        Ok(written)
    }
}
