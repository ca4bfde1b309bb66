//! Sparse and dense count matrices
//!
//! Grouped counts are accumulated in a sparse matrix keyed by
//! `(row key, column key)`. Cells that never received a value are absent;
//! densifying fills them with zero.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::error::util::checked_sum;

/// Sparse matrix of non-negative counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<R: Ord, C: Ord> {
    cells: BTreeMap<R, BTreeMap<C, u64>>,
}

impl<R: Ord, C: Ord> Default for SparseMatrix<R, C> {
    fn default() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }
}

impl<R: Ord + Clone, C: Ord + Clone> SparseMatrix<R, C> {
    /// Create an empty matrix
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the cell `(row, column)`
    ///
    /// # Errors
    ///
    /// Returns `CountOverflow` if the cell leaves the 64-bit range
    pub fn add(&mut self, row: R, column: C, value: u64) -> Result<()> {
        let cell = self.cells.entry(row).or_default().entry(column).or_insert(0);
        *cell = checked_sum(*cell, value, || "summing a matrix cell".to_string())?;
        Ok(())
    }

    /// Value of a cell, `None` if nothing was ever added to it
    #[must_use]
    pub fn get(&self, row: &R, column: &C) -> Option<u64> {
        self.cells.get(row).and_then(|cols| cols.get(column)).copied()
    }

    /// Sparse cells of every row, rows in ascending order
    pub fn rows(&self) -> impl Iterator<Item = (&R, &BTreeMap<C, u64>)> {
        self.cells.iter()
    }

    /// Every column key that holds a value in some row, sorted
    #[must_use]
    pub fn column_keys(&self) -> BTreeSet<C> {
        self.cells
            .values()
            .flat_map(|cols| cols.keys().cloned())
            .collect()
    }

    /// Number of rows with at least one value
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Dense form over the columns present, zero-filling absent cells
    #[must_use]
    pub fn to_dense(&self) -> DenseMatrix<R, C> {
        let columns: Vec<C> = self.column_keys().into_iter().collect();
        self.to_dense_with_columns(columns)
    }

    /// Dense form over an explicit column list, zero-filling absent cells
    #[must_use]
    pub fn to_dense_with_columns(&self, columns: Vec<C>) -> DenseMatrix<R, C> {
        let mut rows = Vec::with_capacity(self.cells.len());
        let mut values = Vec::with_capacity(self.cells.len());

        for (row, cols) in &self.cells {
            rows.push(row.clone());
            values.push(
                columns
                    .iter()
                    .map(|c| cols.get(c).copied().unwrap_or(0))
                    .collect(),
            );
        }

        DenseMatrix {
            rows,
            columns,
            values,
        }
    }
}

/// Dense, zero-filled matrix with ordered row and column keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R, C> {
    /// Row keys, ascending
    pub rows: Vec<R>,
    /// Column keys in output order
    pub columns: Vec<C>,
    /// `values[row][column]`
    pub values: Vec<Vec<u64>>,
}

impl<R, C> DenseMatrix<R, C> {
    /// Values of one column across all rows
    #[must_use]
    pub fn column_values(&self, column: usize) -> Vec<u64> {
        self.values.iter().map(|row| row[column]).collect()
    }
}
