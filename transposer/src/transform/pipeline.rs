//! High-level pipeline API: read → transpose → write.
//!
//! # Example
//!
//! ```rust,ignore
//! use transposer::transpose_file;
//!
//! let summary = transpose_file("inputMatrix.txt", "outputMatrix.txt")?;
//! println!("{} -> {}", summary.input_shape, summary.output_shape);
//! ```

use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use super::transpose::transpose;
use crate::error::PipelineResult;
use crate::models::Shape;
use crate::parser::read_matrix_file;
use crate::writer::write_matrix_file;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransposeSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Encoding detected on the input bytes
    pub encoding: String,
    pub input_shape: Shape,
    pub output_shape: Shape,
}

/// Transpose the matrix in `input` and write it to `output`.
///
/// The input is fully read and validated before `output` is opened, so a
/// read or shape error never creates or modifies the output file.
pub fn transpose_file<P, Q>(input: P, output: Q) -> PipelineResult<TransposeSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    let parsed = read_matrix_file(input)?;
    let input_shape = parsed.matrix.shape();
    info!(
        "Read {} matrix from {} ({})",
        input_shape,
        input.display(),
        parsed.encoding
    );

    let transposed = transpose(parsed.matrix);
    let output_shape = transposed.shape();

    write_matrix_file(&transposed, output)?;
    info!("Wrote {} matrix to {}", output_shape, output.display());

    Ok(TransposeSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        encoding: parsed.encoding,
        input_shape,
        output_shape,
    })
}
