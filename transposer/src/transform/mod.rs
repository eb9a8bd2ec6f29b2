//! Transformation module.
//!
//! - Transpose: swap row and column indices of a matrix
//! - Pipeline: read → transpose → write on files

pub mod pipeline;
pub mod transpose;

pub use pipeline::*;
pub use transpose::{transpose, transpose_rows};
