//! Vector helpers used by the Householder step.
//!
//! `InnerProduct` is implemented for any slice of `num_traits::Float`;
//! `scale_in_place` normalises a reflector.

use crate::core::traits::InnerProduct;
use num_traits::Float;

/// Implements inner product and norm for slices.
impl<T: Float> InnerProduct for [T] {
    type Scalar = T;

    /// Computes the dot product of two slices: `x^T y`.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    fn dot(&self, y: &Self) -> T {
        assert_eq!(self.len(), y.len(), "Vectors must have the same length");
        self.iter()
            .zip(y.iter())
            .map(|(xi, yi)| *xi * *yi)
            .fold(T::zero(), |acc, v| acc + v)
    }

    fn sum_sq(&self) -> T {
        self.iter().map(|xi| *xi * *xi).fold(T::zero(), |acc, v| acc + v)
    }

    /// Computes the Euclidean norm: `||x||_2`.
    fn norm(&self) -> T {
        self.sum_sq().sqrt()
    }
}

/// `alpha * x`, in place.
pub fn scale_in_place<T: Float>(x: &mut [T], alpha: T) {
    for xi in x.iter_mut() {
        *xi = *xi * alpha;
    }
}
