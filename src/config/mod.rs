//! Configuration for decompositions.

pub mod options;
pub use options::QrOptions;
