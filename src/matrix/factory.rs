//! Matrix factory: zero, identity and random matrices.
//!
//! The free functions take signed dimensions and reject negative values with
//! `MatError::InvalidDimension`. Random generation never touches a global
//! source; the caller passes the generator in.

use crate::error::{checked_dim, Result};
use crate::matrix::dense::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

impl Matrix {
    /// `rows × cols` matrix with entries drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Matrix::from_fn(rows, cols, |_, _| rng.r#gen::<f64>())
    }

    /// Like [`Matrix::random`], with a `StdRng` seeded from `seed`.
    pub fn random_seeded(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Matrix::random(rows, cols, &mut rng)
    }
}

/// Allocates a `rows × cols` matrix of zeros.
pub fn create_matrix(rows: i64, cols: i64) -> Result<Matrix> {
    let m = checked_dim(rows, "rows")?;
    let n = checked_dim(cols, "cols")?;
    Ok(Matrix::zeros(m, n))
}

/// Returns the `n × n` identity.
pub fn identity_matrix(n: i64) -> Result<Matrix> {
    Ok(Matrix::identity(checked_dim(n, "n")?))
}

/// Returns a `rows × cols` matrix of uniform `[0, 1)` samples from `rng`.
pub fn random_matrix<R: Rng + ?Sized>(rows: i64, cols: i64, rng: &mut R) -> Result<Matrix> {
    let m = checked_dim(rows, "rows")?;
    let n = checked_dim(cols, "cols")?;
    Ok(Matrix::random(m, n, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatError;

    #[test]
    fn negative_dimensions_are_invalid() {
        assert!(matches!(create_matrix(-1, 3), Err(MatError::InvalidDimension(_))));
        assert!(matches!(create_matrix(3, -1), Err(MatError::InvalidDimension(_))));
        assert!(matches!(identity_matrix(-2), Err(MatError::InvalidDimension(_))));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(random_matrix(-1, 0, &mut rng), Err(MatError::InvalidDimension(_))));
    }

    #[test]
    fn zero_sized_matrices_are_allowed() {
        assert_eq!(create_matrix(0, 4).unwrap().shape(), (0, 4));
        assert_eq!(identity_matrix(0).unwrap().shape(), (0, 0));
    }

    #[test]
    fn create_matrix_is_all_zero() {
        let z = create_matrix(2, 3).unwrap();
        assert_eq!(z.shape(), (2, 3));
        assert!(z.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn random_values_are_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = random_matrix(6, 5, &mut rng).unwrap();
        assert_eq!(r.shape(), (6, 5));
        assert!(r.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(Matrix::random_seeded(3, 3, 42), Matrix::random_seeded(3, 3, 42));
        assert_ne!(Matrix::random_seeded(3, 3, 42), Matrix::random_seeded(3, 3, 43));
    }
}
