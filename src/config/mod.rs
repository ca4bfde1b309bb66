//! Configuration for the aggregation pipelines.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::schema::DateFormatConfig;

/// Default number of rows per CSV read batch
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// First day of the vaccination campaign in the source feed
pub const CAMPAIGN_START: (i32, u32, u32) = (2020, 12, 27);

/// File format of the written artifacts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated text with a header row
    #[default]
    Csv,
    /// Apache Parquet
    Parquet,
}

impl OutputFormat {
    /// File extension used for artifacts of this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }

    /// Parse a format name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "parquet" => Some(Self::Parquet),
            _ => None,
        }
    }
}

/// Configuration for one pipeline run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Dose-level vaccination events
    pub vaccinations_source: PathBuf,
    /// Registrations feed; the registration pipeline runs only when set
    pub registrations_source: Option<PathBuf>,
    /// Directory the artifacts are written to
    pub output_dir: PathBuf,
    /// Artifact file format
    pub output_format: OutputFormat,
    /// Rows per CSV read batch
    pub batch_size: usize,
    /// Date the global aggregation must start at
    pub expected_start_date: NaiveDate,
    /// Date format configuration for the event date column
    pub date_format_config: DateFormatConfig,
    /// Show a spinner while reading sources
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let (year, month, day) = CAMPAIGN_START;
        Self {
            vaccinations_source: PathBuf::from("ockovaci-mista.csv"),
            registrations_source: None,
            output_dir: PathBuf::from("."),
            output_format: OutputFormat::Csv,
            batch_size: DEFAULT_BATCH_SIZE,
            expected_start_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            date_format_config: DateFormatConfig::default(),
            show_progress: false,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file; absent keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path)?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }

    /// Build the configuration from the environment
    ///
    /// `VAX_CONFIG` names an optional JSON file; `VAX_VACCINATIONS_SOURCE`,
    /// `VAX_REGISTRATIONS_SOURCE`, `VAX_OUTPUT_DIR`, `VAX_OUTPUT_FORMAT` and
    /// `VAX_BATCH_SIZE` override individual settings.
    pub fn from_env() -> Result<Self> {
        let base = match std::env::var_os("VAX_CONFIG") {
            Some(path) => Self::from_json_file(Path::new(&path))?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides looked up by variable name
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(source) = lookup("VAX_VACCINATIONS_SOURCE") {
            self.vaccinations_source = PathBuf::from(source);
        }
        if let Some(source) = lookup("VAX_REGISTRATIONS_SOURCE") {
            self.registrations_source = Some(PathBuf::from(source));
        }
        if let Some(dir) = lookup("VAX_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup("VAX_OUTPUT_FORMAT") {
            match OutputFormat::from_name(&name) {
                Some(format) => self.output_format = format,
                None => log::warn!("Ignoring unknown output format '{name}'"),
            }
        }
        if let Some(size) = lookup("VAX_BATCH_SIZE").and_then(|s| s.parse::<usize>().ok()) {
            self.batch_size = size.max(1);
        }
        self
    }

    /// Set the vaccination source path
    #[must_use]
    pub fn with_vaccinations_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.vaccinations_source = path.into();
        self
    }

    /// Set the registrations source path
    #[must_use]
    pub fn with_registrations_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.registrations_source = Some(path.into());
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the artifact format
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the expected campaign start date
    #[must_use]
    pub fn with_expected_start_date(mut self, date: NaiveDate) -> Self {
        self.expected_start_date = date;
        self
    }
}
