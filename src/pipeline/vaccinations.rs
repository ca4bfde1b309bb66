//! Vaccination dose pipeline
//!
//! ```text
//! source ─ check_columns ─ reconcile ─ decode ─┬─ breakdown_per_vaccine ─────────── by_manufacturer
//!                                              ├─ breakdown_per_date_and_region ─── by_date_and_region
//!                                              ├─ breakdown_per_region ──────────── by_region
//!                                              └─ aggregate ─ infer ─ totals ─ rollup
//!                                                   ─ format ─ cumulative ─ first date ─ aggregation
//! ```

use std::path::PathBuf;
use std::time::Instant;

use arrow::record_batch::RecordBatch;

use crate::algorithm::breakdown::{
    breakdown_per_date_and_region, breakdown_per_region, breakdown_per_vaccine,
};
use crate::algorithm::doses::{
    aggregate_by_date_vaccine, apply_total_vaccinations, enrich_cumulative_sums,
    infer_single_dose_completions, rollup_by_date,
};
use crate::catalog::VaccineCatalog;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{
    DoseEvent, GlobalAggregateRow, ManufacturerRow, RecordAdapter, RegionRow, ToRecordBatch,
};
use crate::output::{check_first_date, format_aggregates, pivot_to_record_batch, write_artifacts};
use crate::reader::read_delimited;
use crate::reconcile::reconcile_vaccine_names;
use crate::schema::columns::VACCINE;
use crate::schema::{VACCINATIONS, check_columns};

/// Artifacts of one vaccination run
#[derive(Debug, Clone)]
pub struct VaccinationArtifacts {
    /// `date, vaccine, total_vaccinations`, cumulative per vaccine
    pub by_manufacturer: RecordBatch,
    /// `date` plus one event count column per region
    pub by_date_and_region: RecordBatch,
    /// `region, total_vaccinations`
    pub by_region: RecordBatch,
    /// Cumulative global aggregation
    pub aggregation: RecordBatch,
}

impl VaccinationArtifacts {
    /// Artifacts paired with their published names
    #[must_use]
    pub fn named(&self) -> [(&'static str, &RecordBatch); 4] {
        [
            ("by_manufacturer", &self.by_manufacturer),
            ("by_date_and_region", &self.by_date_and_region),
            ("by_region", &self.by_region),
            ("aggregation", &self.aggregation),
        ]
    }
}

/// Vaccination aggregation over one source table
#[derive(Debug, Clone)]
pub struct VaccinationPipeline<'a> {
    config: PipelineConfig,
    catalog: &'a VaccineCatalog,
}

impl VaccinationPipeline<'static> {
    /// Pipeline using the national vaccine catalog
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_catalog(config, VaccineCatalog::czech())
    }
}

impl<'a> VaccinationPipeline<'a> {
    /// Pipeline using a custom catalog
    #[must_use]
    pub const fn with_catalog(config: PipelineConfig, catalog: &'a VaccineCatalog) -> Self {
        Self { config, catalog }
    }

    /// Validate, reconcile and decode the source table
    pub fn base_pipeline(&self, batch: &RecordBatch) -> Result<Vec<DoseEvent>> {
        check_columns(batch, &VACCINATIONS)?;
        let reconciled = reconcile_vaccine_names(batch, self.catalog, VACCINE)?;
        let events = DoseEvent::from_record_batch(&reconciled, &self.config.date_format_config)?;
        log::info!("Decoded {} dose events", events.len());
        Ok(events)
    }

    /// Cumulative global aggregation rows
    pub fn global_pipeline(&self, events: &[DoseEvent]) -> Result<Vec<GlobalAggregateRow>> {
        let rows = aggregate_by_date_vaccine(events, self.catalog)?;
        let rows = infer_single_dose_completions(rows);
        let rows = apply_total_vaccinations(rows)?;
        let aggregates = rollup_by_date(&rows)?;

        let formatted = format_aggregates(&aggregates)?;
        let cumulative = enrich_cumulative_sums(formatted)?;
        check_first_date(&cumulative, self.config.expected_start_date)?;
        Ok(cumulative)
    }

    /// Compute every artifact from an in-memory table
    pub fn run_batch(&self, batch: &RecordBatch) -> Result<VaccinationArtifacts> {
        let events = self.base_pipeline(batch)?;

        let by_manufacturer = ManufacturerRow::to_record_batch(&breakdown_per_vaccine(&events)?)?;
        let by_date_and_region =
            pivot_to_record_batch(&breakdown_per_date_and_region(&events)?)?;
        let by_region = RegionRow::to_record_batch(&breakdown_per_region(&events)?)?;
        let aggregation = GlobalAggregateRow::to_record_batch(&self.global_pipeline(&events)?)?;

        Ok(VaccinationArtifacts {
            by_manufacturer,
            by_date_and_region,
            by_region,
            aggregation,
        })
    }

    /// Read the configured source, compute the artifacts and write them
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let start = Instant::now();
        let batch = read_delimited(
            &self.config.vaccinations_source,
            self.config.batch_size,
            self.config.show_progress,
        )?;

        let artifacts = self.run_batch(&batch)?;
        let written = write_artifacts(
            &self.config.output_dir,
            self.config.output_format,
            &artifacts.named(),
        )?;

        log::info!(
            "Vaccination pipeline wrote {} artifacts in {:?}",
            written.len(),
            start.elapsed()
        );
        Ok(written)
    }
}
