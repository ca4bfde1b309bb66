//! Logging utilities for output and progress tracking

pub mod log;
pub mod progress;

pub use log::{
    log_artifact_published, log_artifact_staged, log_artifacts_discarded, log_empty_source,
    log_read_complete, log_read_start,
};
pub use progress::{ReadProgress, create_spinner};
