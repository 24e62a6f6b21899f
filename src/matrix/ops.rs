//! Matrix multiplication and transpose.

use crate::error::{MatError, Result};
use crate::matrix::dense::Matrix;

impl Matrix {
    /// Compute `self · other`.
    ///
    /// Fails with `DimensionMismatch` when `self.cols() != other.rows()`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        multiply(self, other)
    }
}

/// Computes `C = A·B` with the plain triple loop.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut c = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut sum = 0.0;
            for k in 0..a.cols() {
                sum += a[(i, k)] * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }
    Ok(c)
}

/// Free-function form of [`Matrix::transpose`].
pub fn transpose(a: &Matrix) -> Matrix {
    a.transpose()
}
