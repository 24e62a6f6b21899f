//! Householder QR decomposition with explicit accumulation of Q.
//!
//! Given an `m × n` matrix `A`, this module computes an orthogonal `m × m`
//! factor `Q` and an upper-triangular `m × n` factor `R` with `A = Q·R`.
//! Columns are reduced one at a time: for column `k`, a Householder reflector
//! built from `A[k.., k]` zeroes the entries below the diagonal, the working
//! copy is updated as `A ← H_k·A`, and the orthogonal factor as `Q ← Q·H_k`.
//! Both updates are rank-1 on the active block, so the whole decomposition
//! costs `O(m²n)`.
//!
//! The input is never mutated; the decomposer works on a deep copy.
//!
//! # Errors
//! - `LinearlyDependentColumns` when the active part of a pivot column has
//!   zero norm (or norm at most `QrOptions::pivot_tol`). No partial result is
//!   returned.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §5.2
//! - Trefethen & Bau, Numerical Linear Algebra, Lecture 10

use crate::config::QrOptions;
use crate::core::traits::InnerProduct;
use crate::decomp::householder::{householder_vector, leading_sign, reflect_cols, reflect_rows};
use crate::error::{MatError, Result};
use crate::matrix::{multiply, Matrix};
use log::{debug, trace};

/// Output of a QR decomposition: `Q` (`m × m`) and `R` (`m × n`).
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    q: Matrix,
    r: Matrix,
    reflections: usize,
}

impl QrDecomposition {
    /// The orthogonal factor.
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// The upper-triangular factor.
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// Consume the result, returning `(Q, R)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }

    /// Number of reflections applied.
    pub fn reflections(&self) -> usize {
        self.reflections
    }

    /// Recompute `Q·R`.
    pub fn reconstruct(&self) -> Result<Matrix> {
        multiply(&self.q, &self.r)
    }
}

/// Householder QR decomposer.
#[derive(Debug, Clone, Default)]
pub struct QrDecomposer {
    /// Zero threshold for pivot columns.
    pub options: QrOptions,
}

impl QrDecomposer {
    /// Create a decomposer with an exact-zero pivot threshold.
    pub fn new() -> Self {
        Self::with_options(QrOptions::default())
    }

    pub fn with_options(options: QrOptions) -> Self {
        QrDecomposer { options }
    }

    /// Decompose `a` into `Q·R`.
    ///
    /// # Arguments
    /// * `a` - Input matrix (`m × n`, any shape); left untouched
    ///
    /// # Returns
    /// * `Ok(QrDecomposition)` with `Q` orthogonal and `R` upper-triangular
    /// * `Err(MatError::LinearlyDependentColumns)` on a zero-norm pivot column
    pub fn decompose(&self, a: &Matrix) -> Result<QrDecomposition> {
        let (m, n) = a.shape();
        debug!("start householder qr: {m}x{n}, options: {:?}.", self.options);

        let mut r = a.clone();
        let mut q = Matrix::identity(m);
        let mut reflections = 0;

        // Columns past the last row have an empty active segment.
        for k in 0..n.min(m) {
            let mut y = r.column(k);
            y.drain(..k);
            let norm = y.norm();
            if norm <= self.options.pivot_tol {
                debug!("zero-norm pivot in column {k}, aborting.");
                return Err(MatError::LinearlyDependentColumns { column: k });
            }
            trace!("column {k}: norm = {norm}, sign = {}", leading_sign(y[0]));

            // |w₀| >= ‖y‖ > 0 here, so this only fires for a vanished segment
            let Some(v) = householder_vector(&y, norm) else {
                trace!("column {k}: degenerate reflector, identity applied.");
                continue;
            };

            reflect_rows(&mut r, k, k, &v);
            reflect_cols(&mut q, k, &v);
            for i in (k + 1)..m {
                r[(i, k)] = 0.0;
            }
            reflections += 1;
        }

        debug!("householder qr done: {reflections} reflections.");
        trace!("R =\n{r}");

        Ok(QrDecomposition { q, r, reflections })
    }
}

/// Decompose `a` with default options.
pub fn qr_decompose(a: &Matrix) -> Result<QrDecomposition> {
    QrDecomposer::new().decompose(a)
}
