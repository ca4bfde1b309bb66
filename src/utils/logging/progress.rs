//! Progress reporting for source reads, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Template of the read spinner
pub const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {pos} rows {msg}";

/// Create a spinner progress bar for operations without a known length
///
/// # Arguments
/// * `message` - Optional message to display with the spinner
#[must_use]
pub fn create_spinner(message: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    if let Some(msg) = message {
        pb.set_message(msg.to_string());
    }

    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Row counter for a source read; silent unless enabled
#[derive(Debug)]
pub struct ReadProgress {
    bar: Option<ProgressBar>,
}

impl ReadProgress {
    /// Start tracking a read, showing a spinner when `enabled`
    #[must_use]
    pub fn new(enabled: bool, message: &str) -> Self {
        Self {
            bar: enabled.then(|| create_spinner(Some(message))),
        }
    }

    /// Record rows that have been read
    pub fn advance(&self, rows: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(rows as u64);
        }
    }

    /// Finish and clear the spinner
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
