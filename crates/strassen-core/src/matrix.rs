//! Square integer matrix with elementwise helpers.
//!
//! Elements are `i64` stored row-major in one contiguous buffer, so every
//! row has exactly `dim` entries by construction. Arithmetic wraps on
//! overflow (two's complement); results are exact modulo 2^64.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// n×n matrix of `i64` values.
///
/// Serializes as a list of rows; deserialization rejects non-square input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<i64>>", try_from = "Vec<Vec<i64>>")]
pub struct Matrix {
    dim: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Create an n×n matrix filled with zeros.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0; dim * dim],
        }
    }

    /// Create the n×n identity matrix.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.data[i * dim + i] = 1;
        }
        m
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(MatrixError::NotSquare {
                    rows: dim,
                    cols: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { dim, data })
    }

    /// Build a matrix from a row-major buffer of `dim * dim` values.
    pub fn from_vec(dim: usize, data: Vec<i64>) -> Result<Self, MatrixError> {
        if dim.checked_mul(dim) != Some(data.len()) {
            return Err(MatrixError::NotSquare {
                rows: dim,
                cols: data.len().checked_div(dim).unwrap_or(data.len()),
            });
        }
        Ok(Self { dim, data })
    }

    pub(crate) fn from_parts(dim: usize, data: Vec<i64>) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Self { dim, data }
    }

    /// Dimension `n` of this n×n matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether the matrix has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Element at (row, col), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        Some(self.data[row * self.dim + col])
    }

    /// Set the element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of bounds for {0}x{0} matrix",
            self.dim
        );
        self.data[row * self.dim + col] = value;
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Copy out all rows as nested vectors.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<i64>> {
        (0..self.dim).map(|r| self.row(r).to_vec()).collect()
    }

    /// Row-major view of the underlying buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Main diagonal, top-left to bottom-right.
    #[must_use]
    pub fn diagonal(&self) -> Vec<i64> {
        (0..self.dim).map(|i| self.data[i * self.dim + i]).collect()
    }

    /// Sum of the main diagonal (wrapping).
    #[must_use]
    pub fn trace(&self) -> i64 {
        (0..self.dim).fold(0i64, |acc, i| {
            acc.wrapping_add(self.data[i * self.dim + i])
        })
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        check_same_dim(self, other)?;
        Ok(self.add_unchecked(other))
    }

    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        check_same_dim(self, other)?;
        Ok(self.subtract_unchecked(other))
    }

    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        self.zip_with(other, i64::wrapping_add)
    }

    pub(crate) fn subtract_unchecked(&self, other: &Self) -> Self {
        self.zip_with(other, i64::wrapping_sub)
    }

    fn zip_with(&self, other: &Self, op: fn(i64, i64) -> i64) -> Self {
        debug_assert_eq!(self.dim, other.dim);
        Self {
            dim: self.dim,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&x, &y)| op(x, y))
                .collect(),
        }
    }

    /// Fresh copy enlarged to `dim` with zeros in the new rows and columns.
    pub(crate) fn padded(&self, dim: usize) -> Self {
        debug_assert!(dim >= self.dim);
        let mut out = Self::zeros(dim);
        for r in 0..self.dim {
            out.data[r * dim..r * dim + self.dim].copy_from_slice(self.row(r));
        }
        out
    }

    /// Fresh copy of the top-left `dim`×`dim` block.
    pub(crate) fn cropped(&self, dim: usize) -> Self {
        self.block(0, 0, dim)
    }

    /// Copy the `size`×`size` block whose top-left corner is (row, col).
    pub(crate) fn block(&self, row: usize, col: usize, size: usize) -> Self {
        debug_assert!(row + size <= self.dim && col + size <= self.dim);
        let mut data = Vec::with_capacity(size * size);
        for r in row..row + size {
            let start = r * self.dim + col;
            data.extend_from_slice(&self.data[start..start + size]);
        }
        Self { dim: size, data }
    }

    /// Split an even-dimensioned matrix into `[top-left, top-right,
    /// bottom-left, bottom-right]`.
    pub(crate) fn quadrants(&self) -> [Self; 4] {
        debug_assert_eq!(self.dim % 2, 0);
        let half = self.dim / 2;
        [
            self.block(0, 0, half),
            self.block(0, half, half),
            self.block(half, 0, half),
            self.block(half, half, half),
        ]
    }

    /// Assemble four equally sized blocks into one matrix of twice the size.
    pub(crate) fn from_quadrants(q11: &Self, q12: &Self, q21: &Self, q22: &Self) -> Self {
        let half = q11.dim;
        let dim = half * 2;
        let mut data = Vec::with_capacity(dim * dim);
        for r in 0..half {
            data.extend_from_slice(q11.row(r));
            data.extend_from_slice(q12.row(r));
        }
        for r in 0..half {
            data.extend_from_slice(q21.row(r));
            data.extend_from_slice(q22.row(r));
        }
        Self { dim, data }
    }
}

pub(crate) fn check_same_dim(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.dim != b.dim {
        return Err(MatrixError::ShapeMismatch {
            left: a.dim,
            right: b.dim,
        });
    }
    Ok(())
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(m: Matrix) -> Self {
        m.rows()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of bounds for {0}x{0} matrix",
            self.dim
        );
        &self.data[row * self.dim + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dim {
            let row = self.row(r);
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
