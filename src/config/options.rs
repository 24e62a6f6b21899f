//! API options for the QR decomposer.
//!
//! This module provides the `QrOptions` struct, which controls the norm below
//! which a pivot column counts as zero. It defaults to exact zero, so only a
//! column whose active part vanishes is rejected.

/// Decomposition thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrOptions {
    /// A pivot sub-column with `||y||₂ <= pivot_tol` is rejected as linearly dependent.
    pub pivot_tol: f64,
}

impl QrOptions {
    /// Exact-zero threshold.
    pub fn new() -> Self {
        Self { pivot_tol: 0.0 }
    }

    /// Set the pivot threshold (treat near-zero columns as dependent).
    pub fn with_pivot_tol(mut self, tol: f64) -> Self {
        self.pivot_tol = tol;
        self
    }
}

impl Default for QrOptions {
    fn default() -> Self {
        Self::new()
    }
}
