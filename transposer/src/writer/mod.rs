//! Serialize a [`Matrix`] back to comma-delimited text.
//!
//! One row per line, fields joined by [`DELIMITER`], `\n` after every row
//! including the last.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{WriteError, WriteResult};
use crate::models::{Matrix, DELIMITER};

/// Write a matrix to any writer.
pub fn write_matrix<W: Write>(matrix: &Matrix, mut writer: W) -> WriteResult<()> {
    let mut buf = [0u8; 4];
    let delimiter = DELIMITER.encode_utf8(&mut buf).as_bytes();

    for row in matrix.rows() {
        for (idx, token) in row.iter().enumerate() {
            if idx > 0 {
                writer.write_all(delimiter)?;
            }
            writer.write_all(token.as_bytes())?;
        }
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Render a matrix as a string, through [`write_matrix`].
pub fn to_delimited_string(matrix: &Matrix) -> WriteResult<String> {
    let mut buf = Vec::new();
    write_matrix(matrix, &mut buf)?;

    String::from_utf8(buf)
        .map_err(|e| WriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Create (or truncate) `path` and write the matrix to it.
///
/// The file is closed on return, whether writing succeeded or not.
pub fn write_matrix_file<P: AsRef<Path>>(matrix: &Matrix, path: P) -> WriteResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| WriteError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    write_matrix(matrix, BufWriter::new(file))?;
    debug!("Wrote {} to {}", matrix.shape(), path.display());
    Ok(())
}
