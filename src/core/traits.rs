//! Core vector traits for hqr.

/// Inner products & norms over a column segment.
pub trait InnerProduct {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(self, y).
    fn dot(&self, y: &Self) -> Self::Scalar;
    /// Compute Σ xᵢ².
    fn sum_sq(&self) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self) -> Self::Scalar;
}
