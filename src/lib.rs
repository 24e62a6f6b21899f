//! hqr: dense `f64` matrices with Householder QR
//!
//! This crate provides a small row-major dense matrix type with checked
//! construction and multiplication, and a QR decomposition based on
//! Householder reflections that returns an explicit orthogonal factor.

pub mod config;
pub mod core;
pub mod decomp;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use config::*;
pub use decomp::*;
pub use error::*;
pub use matrix::*;

pub use crate::core::traits::InnerProduct;
