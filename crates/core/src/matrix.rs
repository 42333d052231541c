use std::{
    fmt,
    ops::{Index, IndexMut},
};

use thiserror::Error;

/// Errors that can occur when building a [`Matrix`] from rows.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// No rows, or rows with no columns.
    #[error("matrix has no entries")]
    Empty,

    /// A row's length differs from the first row's length.
    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A dense row-major matrix backed by a single flat buffer.
///
/// Entries are addressed as `m[[row, col]]`. Row slices are contiguous, so
/// whole-row operations (scaling, multiply-add) never allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Creates an `nrows × ncols` matrix of zeros.
    #[must_use]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Creates a matrix from a slice of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if there are no entries, or
    /// [`MatrixError::Ragged`] if any row's length differs from the first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        if ncols == 0 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != ncols {
                return Err(MatrixError::Ragged {
                    row,
                    len: values.len(),
                    expected: ncols,
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            data,
            nrows: rows.len(),
            ncols,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.nrows, "row {i} out of bounds ({} rows)", self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Returns row `i` as a mutable contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.nrows, "row {i} out of bounds ({} rows)", self.nrows);
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.ncols.max(1))
    }

    /// Returns the entries of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(j < self.ncols);
        self.rows().map(move |row| row[j])
    }

    /// Multiplies every entry of row `i` by `factor`.
    pub fn scale_row(&mut self, i: usize, factor: f64) {
        for value in self.row_mut(i) {
            *value *= factor;
        }
    }

    /// Adds `factor` times row `read` to row `write`.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    pub fn mul_add_row(&mut self, read: usize, write: usize, factor: f64) {
        assert!(read < self.nrows && write < self.nrows);
        if read == write {
            self.scale_row(write, 1.0 + factor);
            return;
        }

        let ncols = self.ncols;
        let (source, target) = if read < write {
            let (head, tail) = self.data.split_at_mut(write * ncols);
            (&head[read * ncols..(read + 1) * ncols], &mut tail[..ncols])
        } else {
            let (head, tail) = self.data.split_at_mut(read * ncols);
            (&tail[..ncols], &mut head[write * ncols..(write + 1) * ncols])
        };

        for (t, s) in target.iter_mut().zip(source) {
            *t += factor * s;
        }
    }
}

impl Index<[usize; 2]> for Matrix {
    type Output = f64;

    fn index(&self, [i, j]: [usize; 2]) -> &Self::Output {
        assert!(i < self.nrows && j < self.ncols, "index [{i}, {j}] out of bounds");
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<[usize; 2]> for Matrix {
    fn index_mut(&mut self, [i, j]: [usize; 2]) -> &mut Self::Output {
        assert!(i < self.nrows && j < self.ncols, "index [{i}, {j}] out of bounds");
        &mut self.data[i * self.ncols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>10.4}")?;
            }
        }
        Ok(())
    }
}
