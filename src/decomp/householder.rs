//! Householder reflector construction and application.
//!
//! For a column segment `y` with `‖y‖₂ = norm`, the reflector vector is
//! `w = y + sign(y₀)·norm·e₁`, normalised to `v = w / ‖w‖₂`. Taking the sign of
//! `y₀` keeps the update to the leading entry free of cancellation. The
//! reflection `H = I - 2·v·vᵗ` acts on the trailing rows/columns starting at
//! `k`; it is never formed explicitly, both sides are applied as rank-1
//! updates.

use crate::core::traits::InnerProduct;
use crate::core::wrappers::scale_in_place;
use crate::matrix::Matrix;

/// `+1` for non-negative leading entries, `-1` otherwise.
pub fn leading_sign(y0: f64) -> f64 {
    if y0 >= 0.0 { 1.0 } else { -1.0 }
}

/// Unit Householder vector for `y`, or `None` when `‖w‖₂ == 0` and the
/// reflection degenerates to the identity.
///
/// `norm` must be `‖y‖₂`; `y` must be non-empty.
pub fn householder_vector(y: &[f64], norm: f64) -> Option<Vec<f64>> {
    let mut w = y.to_vec();
    w[0] += leading_sign(y[0]) * norm;
    let w_norm = w.norm();
    if w_norm == 0.0 {
        return None;
    }
    scale_in_place(&mut w, 1.0 / w_norm);
    Some(w)
}

/// `A ← H·A` on rows `k..`, touching columns `first_col..` only.
///
/// Columns before `first_col` must already be zero in rows `k..`.
pub fn reflect_rows(a: &mut Matrix, k: usize, first_col: usize, v: &[f64]) {
    debug_assert_eq!(k + v.len(), a.rows());
    for j in first_col..a.cols() {
        let s: f64 = v.iter().enumerate().map(|(i, vi)| vi * a[(k + i, j)]).sum();
        for (i, vi) in v.iter().enumerate() {
            a[(k + i, j)] -= 2.0 * vi * s;
        }
    }
}

/// `Q ← Q·H` on columns `k..`.
pub fn reflect_cols(q: &mut Matrix, k: usize, v: &[f64]) {
    debug_assert_eq!(k + v.len(), q.cols());
    for i in 0..q.rows() {
        let s: f64 = q.row(i)[k..].dot(v);
        for (c, vc) in v.iter().enumerate() {
            q[(i, k + c)] -= 2.0 * s * vc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::multiply;
    use approx::assert_abs_diff_eq;

    /// `m × m` identity whose trailing block starting at `(k, k)` is `I - 2·v·vᵗ`.
    fn embedded_reflector(m: usize, k: usize, v: &[f64]) -> Matrix {
        let mut h = Matrix::identity(m);
        for (a, &va) in v.iter().enumerate() {
            for (b, &vb) in v.iter().enumerate() {
                h[(k + a, k + b)] -= 2.0 * va * vb;
            }
        }
        h
    }

    #[test]
    fn sign_of_zero_is_positive() {
        assert_eq!(leading_sign(0.0), 1.0);
        assert_eq!(leading_sign(2.5), 1.0);
        assert_eq!(leading_sign(-1e-300), -1.0);
    }

    #[test]
    fn vector_is_unit_length() {
        let y = [1.0, 1.0, -1.0];
        let v = householder_vector(&y, y.norm()).unwrap();
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn leading_zero_does_not_divide() {
        let y = [0.0, 3.0, 4.0];
        let v = householder_vector(&y, 5.0).unwrap();
        assert!(v.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn nonzero_segment_never_degenerates() {
        // |w₀| = |y₀| + ‖y‖, so w vanishes only with y
        for y in [[1e-150, 0.0], [-2.0, 0.0], [0.0, 1e-100]] {
            assert!(householder_vector(&y, y.norm()).is_some());
        }
        assert!(householder_vector(&[0.0, 0.0], 0.0).is_none());
    }

    #[test]
    fn reflection_maps_segment_onto_first_axis() {
        let mut a = Matrix::from_rows(vec![vec![9.0, 1.0], vec![0.0, 3.0], vec![0.0, 4.0]]).unwrap();
        let v = householder_vector(&[3.0, 4.0], 5.0).unwrap();
        reflect_rows(&mut a, 1, 1, &v);
        // leading row untouched
        assert_eq!(a.row(0), &[9.0, 1.0]);
        assert_abs_diff_eq!(a[(1, 1)], -5.0, epsilon = 1e-14);
        assert_abs_diff_eq!(a[(2, 1)], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn rank_one_updates_match_explicit_reflector() {
        let a = Matrix::random_seeded(5, 3, 17);
        let q = Matrix::random_seeded(5, 5, 18);
        let y = a.column(1)[1..].to_vec();
        let v = householder_vector(&y, y.norm()).unwrap();
        let h = embedded_reflector(5, 1, &v);
        assert!(h.is_orthogonal(1e-14));

        let mut left = a.clone();
        reflect_rows(&mut left, 1, 0, &v);
        assert!(left.approx_eq(&multiply(&h, &a).unwrap(), 1e-13));

        let mut right = q.clone();
        reflect_cols(&mut right, 1, &v);
        assert!(right.approx_eq(&multiply(&q, &h).unwrap(), 1e-13));
    }
}
