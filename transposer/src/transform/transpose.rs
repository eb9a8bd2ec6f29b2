//! Matrix transposition.
//!
//! `output[j][i] = input[i][j]`. Tokens are moved, not cloned, so the input
//! matrix is consumed.

use log::debug;

use crate::error::MatrixResult;
use crate::models::{Matrix, Token};

/// Transpose a matrix: R×C in, C×R out.
///
/// # Example
///
/// ```
/// use transposer::{parse_matrix, transpose};
///
/// let m = parse_matrix("1,2\n3,4\n5,6").unwrap();   // 3×2
/// let t = transpose(m);                             // 2×3
///
/// assert_eq!(t.rows()[0], vec!["1", "3", "5"]);
/// assert_eq!(t.rows()[1], vec!["2", "4", "6"]);
/// ```
pub fn transpose(matrix: Matrix) -> Matrix {
    let shape = matrix.shape();

    let mut columns: Vec<Vec<Token>> = (0..shape.columns)
        .map(|_| Vec::with_capacity(shape.rows))
        .collect();

    for row in matrix.into_rows() {
        for (column, token) in columns.iter_mut().zip(row) {
            column.push(token);
        }
    }

    debug!("Transposed {} -> {}", shape, shape.transposed());
    Matrix::from_rectangular(columns)
}

/// Validate raw rows, then transpose them.
pub fn transpose_rows(rows: Vec<Vec<Token>>) -> MatrixResult<Matrix> {
    Ok(transpose(Matrix::from_rows(rows)?))
}
