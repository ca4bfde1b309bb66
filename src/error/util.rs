//! Utility functions for error handling
//!
//! This module provides helpers that attach path information to filesystem
//! failures and guard checked count arithmetic.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
///
/// # Returns
/// * `Result<fs::File>` - The opened file or an error carrying the path
pub fn safe_open_file(path: &Path) -> Result<fs::File> {
    if path.exists() && !path.is_file() {
        return Err(Error::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path is not a file"),
        ));
    }

    fs::File::open(path).map_err(|e| Error::io(path, e))
}

/// Create a file for writing, reporting the path on failure
pub fn safe_create_file(path: &Path) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| Error::io(path, e))
}

/// Make sure an output directory exists, creating it when needed
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(Error::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "path is not a directory"),
            ));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Add two counts, failing with `CountOverflow` instead of wrapping
pub fn checked_sum(left: u64, right: u64, context: impl FnOnce() -> String) -> Result<u64> {
    left.checked_add(right).ok_or_else(|| Error::overflow(context()))
}
