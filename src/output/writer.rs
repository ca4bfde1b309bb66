//! Artifact writer
//!
//! Every artifact is a `RecordBatch` persisted as `<name>.csv` or
//! `<name>.parquet` in the output directory. A set of artifacts is staged
//! under `<file>.tmp` names first and only moved to the final paths once
//! every one of them has been written.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::config::OutputFormat;
use crate::error::util::{ensure_directory, safe_create_file};
use crate::error::{Error, Result};
use crate::utils::logging::{log_artifact_published, log_artifact_staged, log_artifacts_discarded};

/// Suffix of an artifact that has been written but not yet published
pub const STAGING_SUFFIX: &str = "tmp";

/// Path of an artifact inside the output directory
#[must_use]
pub fn artifact_path(dir: &Path, name: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("{name}.{}", format.extension()))
}

/// Path an artifact is staged under before it is published
#[must_use]
pub fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".");
    staged.push(STAGING_SUFFIX);
    PathBuf::from(staged)
}

/// Write named artifacts into `dir`, creating the directory when needed
///
/// Either every artifact reaches its final path or none does: a failure while
/// staging removes the files staged so far, and no final path is touched.
pub fn write_artifacts(
    dir: &Path,
    format: OutputFormat,
    artifacts: &[(&str, &RecordBatch)],
) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let targets: Vec<PathBuf> = artifacts
        .iter()
        .map(|(name, _)| artifact_path(dir, name, format))
        .collect();
    for target in &targets {
        ensure_replaceable(target)?;
    }

    let mut staged = Vec::with_capacity(artifacts.len());
    for ((name, batch), target) in artifacts.iter().zip(&targets) {
        match stage_artifact(name, batch, target, format) {
            Ok(path) => staged.push(path),
            Err(err) => {
                discard(dir, &staged);
                return Err(err);
            }
        }
    }

    for (idx, ((name, _), target)) in artifacts.iter().zip(&targets).enumerate() {
        if let Err(err) = fs::rename(&staged[idx], target) {
            discard(dir, &staged[idx..]);
            return Err(Error::io(target, err));
        }
        log_artifact_published(name, target);
    }

    Ok(targets)
}

/// An existing final path must be a regular file so publishing can replace it
fn ensure_replaceable(target: &Path) -> Result<()> {
    if target.exists() && !target.is_file() {
        return Err(Error::io(
            target,
            io::Error::new(io::ErrorKind::InvalidInput, "artifact path is not a file"),
        ));
    }
    Ok(())
}

fn stage_artifact(
    name: &str,
    batch: &RecordBatch,
    target: &Path,
    format: OutputFormat,
) -> Result<PathBuf> {
    let start = Instant::now();
    let path = staging_path(target);
    let file = safe_create_file(&path)?;

    if let Err(err) = encode(file, batch, format) {
        let _ = fs::remove_file(&path);
        return Err(err);
    }

    log_artifact_staged(name, batch.num_rows(), start.elapsed());
    Ok(path)
}

fn encode(file: File, batch: &RecordBatch, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut writer = WriterBuilder::new().with_header(true).build(file);
            writer.write(batch)?;
        }
        OutputFormat::Parquet => {
            let props = WriterProperties::builder()
                .set_compression(Compression::SNAPPY)
                .build();
            let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
            writer.write(batch)?;
            writer.close()?;
        }
    }
    Ok(())
}

fn discard(dir: &Path, staged: &[PathBuf]) {
    for path in staged {
        if let Err(err) = fs::remove_file(path) {
            log::warn!("Could not remove staged artifact {}: {err}", path.display());
        }
    }
    log_artifacts_discarded(dir, staged.len());
}
