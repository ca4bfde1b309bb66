//! Aggregation algorithms
//!
//! This module contains the dose-regimen aware global aggregation and the
//! count breakdowns computed laterally from the reconciled events.

pub mod breakdown;
pub mod doses;
pub mod matrix;

pub use matrix::{DenseMatrix, SparseMatrix};
