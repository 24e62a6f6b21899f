use thiserror::Error;

// Unified error type for hqr

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("dimension mismatch: {}x{} times {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("matrix has linearly dependent columns (zero-norm pivot in column {column})")]
    LinearlyDependentColumns { column: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatError>;

/// Converts a signed dimension into a `usize`, rejecting negative values.
pub(crate) fn checked_dim(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| MatError::InvalidDimension(format!("{what} must be non-negative, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimension_is_rejected() {
        assert_eq!(checked_dim(3, "rows"), Ok(3));
        assert!(matches!(checked_dim(-1, "rows"), Err(MatError::InvalidDimension(_))));
    }

    #[test]
    fn mismatch_message_names_both_shapes() {
        let err = MatError::DimensionMismatch { left: (2, 3), right: (2, 2) };
        assert_eq!(err.to_string(), "dimension mismatch: 2x3 times 2x2");
    }
}
