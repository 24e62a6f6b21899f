//! Matrix module: the dense matrix type, its factory and multiplication.

pub mod dense;
pub mod factory;
pub mod ops;

pub use dense::Matrix;
pub use factory::{create_matrix, identity_matrix, random_matrix};
pub use ops::{multiply, transpose};
