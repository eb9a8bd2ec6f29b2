//! # Transposer - comma-delimited text matrix transposition
//!
//! Reads a rectangular matrix of opaque text tokens, swaps rows and columns,
//! and writes the result back in the same format.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Input file │────▶│   Parser    │────▶│  Transpose  │────▶│   Writer    │
//! │ (any enc.)  │     │ (rectangle) │     │  (R×C→C×R)  │     │ (utf-8, \n) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use transposer::transpose_file;
//!
//! let summary = transpose_file("inputMatrix.txt", "outputMatrix.txt")?;
//! println!("{} -> {}", summary.input_shape, summary.output_shape);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Per-stage error types
//! - [`models`] - Matrix, Shape, Token
//! - [`parser`] - Text to matrix, with encoding detection
//! - [`transform`] - Transposition and the file pipeline
//! - [`writer`] - Matrix to text

// Core modules
pub mod error;
pub mod models;

// Stages
pub mod parser;
pub mod transform;
pub mod writer;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    MatrixError, MatrixResult, PipelineError, PipelineResult, ReadError, ReadResult, WriteError,
    WriteResult,
};

pub use models::{Matrix, Shape, Token, DELIMITER};

pub use parser::{
    decode_content, detect_encoding, parse_bytes, parse_matrix, parse_reader, read_matrix_file,
    ParseResult,
};

pub use transform::{transpose, transpose_file, transpose_rows, TransposeSummary};

pub use writer::{to_delimited_string, write_matrix, write_matrix_file};

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "inputMatrix.txt";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "outputMatrix.txt";
