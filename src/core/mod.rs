//! Vector traits and helpers shared by the matrix code and the decomposer.

pub mod traits;
pub mod wrappers;

pub use traits::InnerProduct;
pub use wrappers::scale_in_place;
