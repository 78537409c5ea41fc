use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Errors that can occur when building a [`Matrix`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A row does not have as many entries as there are rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A dense square matrix stored in row-major order.
///
/// Used for Jacobians and for the coefficient matrix of a linear system.
/// Entries are addressed as `matrix[(row, col)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates an `n`×`n` matrix of zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            dim: n,
            data: vec![0.0; n * n],
        }
    }

    /// Creates a matrix from a sequence of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if any row length differs from
    /// the number of rows.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[f64]>,
    {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self { dim: n, data })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns true if the matrix has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Returns row `i` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = i * self.dim;
        &mut self.data[start..start + self.dim]
    }

    /// Returns true if every entry is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Returns the largest entry magnitude, or zero for an empty matrix.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }

    /// Computes the product `self · x`.
    ///
    /// # Panics
    ///
    /// Panics if `x.len()` differs from the matrix dimension.
    #[must_use]
    pub fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(x.len(), self.dim, "vector length must match matrix dimension");
        (0..self.dim)
            .map(|i| self.row(i).iter().zip(x).map(|(a, b)| a * b).sum())
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(j < self.dim, "column index out of bounds");
        &self.data[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(j < self.dim, "column index out of bounds");
        &mut self.data[i * self.dim + j]
    }
}
