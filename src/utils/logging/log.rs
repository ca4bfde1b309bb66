//! Log lines for source reads and artifact writes.

use std::path::Path;
use std::time::Duration;

/// A source file is about to be read
pub fn log_read_start(path: &Path) {
    log::info!("Reading source file {}", path.display());
}

/// A source file was read into a single table
pub fn log_read_complete(path: &Path, rows: usize, elapsed: Duration) {
    log::info!("Read {rows} rows from {} in {elapsed:?}", path.display());
}

/// A source file has a header but no data rows
pub fn log_empty_source(path: &Path) {
    log::warn!(
        "Source file has no data rows, every artifact will be empty: {}",
        path.display()
    );
}

/// An artifact was staged next to its final path
pub fn log_artifact_staged(name: &str, rows: usize, elapsed: Duration) {
    log::debug!("Staged artifact {name} with {rows} rows in {elapsed:?}");
}

/// An artifact was moved to its final path
pub fn log_artifact_published(name: &str, path: &Path) {
    log::info!("Wrote artifact {name} to {}", path.display());
}

/// A run failed while writing and its staged artifacts were removed
pub fn log_artifacts_discarded(dir: &Path, staged: usize) {
    log::warn!(
        "Discarded {staged} staged artifacts in {} after a failed write",
        dir.display()
    );
}
