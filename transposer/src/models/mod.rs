//! Domain models for the transposer pipeline.
//!
//! - [`Token`] - A single opaque field of text
//! - [`Matrix`] - Rectangular rows of tokens
//! - [`Shape`] - Row and column counts of a matrix

use std::fmt;

use serde::Serialize;

use crate::error::{MatrixError, MatrixResult};

/// Field delimiter used for both input and output.
pub const DELIMITER: char = ',';

/// A single field between delimiters. Never trimmed or coerced.
pub type Token = String;

// =============================================================================
// Shape
// =============================================================================

/// Dimensions of a [`Matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    /// Shape with rows and columns swapped.
    pub fn transposed(self) -> Self {
        Self {
            rows: self.columns,
            columns: self.rows,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

// =============================================================================
// Matrix
// =============================================================================

/// An ordered sequence of rows, each an ordered sequence of tokens.
///
/// A `Matrix` always has at least one row, and every row has the same
/// length as the first. Both are checked by [`Matrix::from_rows`], so code
/// holding a `Matrix` can index by the first row's length safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: Vec<Vec<Token>>,
}

impl Matrix {
    /// Build a matrix, rejecting empty or ragged input.
    ///
    /// Ragged rows are reported with their 1-based position.
    pub fn from_rows(rows: Vec<Vec<Token>>) -> MatrixResult<Self> {
        let expected = rows.first().ok_or(MatrixError::Empty)?.len();

        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(MatrixError::Ragged {
                line: idx + 1,
                expected,
                found: row.len(),
            });
        }

        Ok(Self { rows })
    }

    /// Wrap rows the caller has already built rectangular and non-empty.
    pub(crate) fn from_rectangular(rows: Vec<Vec<Token>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    /// Rows in order.
    pub fn rows(&self) -> &[Vec<Token>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        // Non-empty by construction.
        self.rows[0].len()
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.row_count(),
            columns: self.column_count(),
        }
    }

    /// Token at `row`, `col`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Give up the rows, e.g. to move tokens into another matrix.
    pub fn into_rows(self) -> Vec<Vec<Token>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<Token>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_from_rows_rectangular() {
        let m = Matrix::from_rows(rows(&[&["1", "2"], &["3", "4"], &["5", "6"]])).unwrap();
        assert_eq!(m.shape(), Shape { rows: 3, columns: 2 });
        assert_eq!(m.get(2, 1), Some("6"));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_from_rows_empty() {
        assert_eq!(Matrix::from_rows(Vec::new()), Err(MatrixError::Empty));
    }

    #[test]
    fn test_from_rows_short_row() {
        let err = Matrix::from_rows(rows(&[&["1", "2"], &["3"]])).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                line: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_long_row() {
        // Extra fields are rejected, not silently dropped.
        let err = Matrix::from_rows(rows(&[&["1"], &["2"], &["3", "4"]])).unwrap_err();
        assert!(matches!(err, MatrixError::Ragged { line: 3, found: 2, .. }));
    }

    #[test]
    fn test_shape_display_and_transposed() {
        let shape = Shape { rows: 3, columns: 2 };
        assert_eq!(shape.to_string(), "3x2");
        assert_eq!(shape.transposed(), Shape { rows: 2, columns: 3 });
    }
}
