//! Dense row-major `f64` matrix.
//!
//! `Matrix` owns a single `Vec<f64>` of length `rows * cols`, so every row has
//! exactly `cols` elements by construction. `Clone` is the deep copy and `==`
//! is exact element-wise equality; use [`Matrix::approx_eq`] for anything
//! produced by floating-point arithmetic.

use crate::error::{MatError, Result};
use faer::Mat;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        let mut id = Self::zeros(n, n);
        for i in 0..n {
            id.data[i * n + i] = 1.0;
        }
        id
    }

    /// Build from a closure over `(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Construct from raw row-major storage.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatError::InvalidDimension(format!(
                "data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Construct from nested rows. All rows must have the same length.
    ///
    /// An empty outer vector gives a `0 × 0` matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let m = rows.len();
        let n = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(m * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(MatError::InvalidDimension(format!(
                    "row {i} has {} elements, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { rows: m, cols: n, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of the storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Element at `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Overwrite the element at `(i, j)`.
    ///
    /// # Panics
    /// Panics if `(i, j)` is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self[(i, j)] = value;
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        assert!(j < self.cols, "column index {j} out of bounds for {} columns", self.cols);
        (0..self.rows).map(|i| self.data[i * self.cols + j]).collect()
    }

    /// Returns the `cols × rows` transpose; `self` is untouched.
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        t
    }

    /// Same shape and every element within `tol` of its counterpart.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// Every entry below the main diagonal is within `tol` of zero.
    pub fn is_upper_triangular(&self, tol: f64) -> bool {
        (0..self.rows).all(|i| (0..i.min(self.cols)).all(|j| self[(i, j)].abs() <= tol))
    }

    /// Square and `Qᵗ·Q = I` within `tol`.
    pub fn is_orthogonal(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows;
        (0..n).all(|i| {
            (i..n).all(|j| {
                let dot: f64 = (0..n).map(|k| self[(k, i)] * self[(k, j)]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                (dot - expected).abs() <= tol
            })
        })
    }

    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.rows, self.cols, |i, j| self[(i, j)])
    }
}

impl From<&Mat<f64>> for Matrix {
    fn from(m: &Mat<f64>) -> Self {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

/// One bracketed row per line; respects `{:.N}` precision.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{v:.p$}")?,
                    None => write!(f, "{v}")?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
