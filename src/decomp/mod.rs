//! Matrix decompositions.
//!
//! Currently Householder QR: [`qr::QrDecomposer`] and the [`qr_decompose`]
//! shorthand, built on the reflector helpers in [`householder`].

pub mod householder;
pub mod qr;

pub use qr::{qr_decompose, QrDecomposer, QrDecomposition};
