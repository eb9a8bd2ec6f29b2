//! Error types for the transposer pipeline.
//!
//! One error type per stage, plus a top-level wrapper:
//!
//! - [`ReadError`] - loading the input file
//! - [`MatrixError`] - shape problems (empty or ragged input)
//! - [`WriteError`] - serializing the output file
//! - [`PipelineError`] - read → transpose → write orchestration
//!
//! Conversions are `From` implementations so `?` works across stages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Matrix Shape Errors
// =============================================================================

/// The input does not describe a rectangular matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// No rows at all.
    #[error("matrix is empty")]
    Empty,

    /// A row disagrees with the first row's length.
    #[error("ragged matrix: line {line} has {found} fields, expected {expected}")]
    Ragged {
        /// 1-based line (row) number.
        line: usize,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Read Errors
// =============================================================================

/// Errors while loading the input matrix.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Input could not be opened or read.
    #[error("unable to open file to read '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Detected encoding has no decoder.
    #[error("unsupported input encoding '{0}'")]
    UnsupportedEncoding(String),

    /// Input bytes are malformed for the detected encoding.
    #[error("input is not valid {encoding}")]
    Decode { encoding: String },

    /// Content was read but is not a valid matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while serializing the output matrix.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Output could not be created or truncated.
    #[error("unable to open file to write '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure while writing or flushing.
    #[error("failed to write matrix: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transpose_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for shape validation.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result type for read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
