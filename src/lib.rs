//! A Rust library for aggregating dose-level vaccination records into
//! cumulative per-date, per-manufacturer and per-region series.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod reader;
pub mod reconcile;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use catalog::{RegimenKind, VaccineCatalog};
pub use config::{OutputFormat, PipelineConfig};
pub use error::{Error, Result};
pub use pipeline::{
    RegistrationArtifacts, RegistrationPipeline, VaccinationArtifacts, VaccinationPipeline,
};
pub use schema::{SchemaCompatibilityReport, SchemaIssue};

// Arrow types
pub use arrow::record_batch::RecordBatch;
