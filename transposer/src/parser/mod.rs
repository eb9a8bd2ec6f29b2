//! Comma-delimited text to [`Matrix`] parser with encoding auto-detection.
//!
//! Fields are split on [`DELIMITER`] and kept verbatim: no quoting, no
//! trimming. Zero-length lines at the end of the input are skipped; any
//! other line becomes a row.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{MatrixResult, ReadError, ReadResult};
use crate::models::{Matrix, Token, DELIMITER};

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed matrix
    pub matrix: Matrix,
    /// Detected encoding of the source bytes
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// Labels resolve through the WHATWG table, so the latin-1 family maps to
/// windows-1252, which agrees with ISO-8859-1 on every printable byte.
/// Unknown labels and malformed input are errors; nothing is replaced.
pub fn decode_content(bytes: &[u8], encoding: &str) -> ReadResult<String> {
    let decoder = encoding_rs::Encoding::for_label(encoding.as_bytes())
        .ok_or_else(|| ReadError::UnsupportedEncoding(encoding.to_string()))?;

    decoder
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|content| content.into_owned())
        .ok_or_else(|| ReadError::Decode {
            encoding: encoding.to_string(),
        })
}

/// Split one line into tokens.
fn split_line(line: &str) -> Vec<Token> {
    line.split(DELIMITER).map(str::to_string).collect()
}

/// Parse decoded text into a matrix.
///
/// # Example
/// ```
/// use transposer::parse_matrix;
///
/// let m = parse_matrix("1,2\n3,4\n5,6\n").unwrap();
/// assert_eq!(m.shape().to_string(), "3x2");
/// assert_eq!(m.get(1, 0), Some("3"));
/// ```
pub fn parse_matrix(content: &str) -> MatrixResult<Matrix> {
    let mut lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let rows: Vec<Vec<Token>> = lines.into_iter().map(split_line).collect();
    debug!("Split {} lines into rows", rows.len());

    Matrix::from_rows(rows)
}

/// Parse raw bytes, detecting their encoding first.
///
/// Valid UTF-8 is taken as-is without running detection.
pub fn parse_bytes(bytes: &[u8]) -> ReadResult<ParseResult> {
    if let Ok(content) = std::str::from_utf8(bytes) {
        return Ok(ParseResult {
            matrix: parse_matrix(content)?,
            encoding: "utf-8".to_string(),
        });
    }

    let encoding = detect_encoding(bytes);
    debug!("Detected encoding: {}", encoding);

    let content = decode_content(bytes, &encoding)?;
    let matrix = parse_matrix(&content)?;

    Ok(ParseResult { matrix, encoding })
}

/// Parse a matrix from any reader.
///
/// The whole source is read before parsing; read failures are reported as
/// [`ReadError::FileOpen`] against a `<reader>` path.
pub fn parse_reader<R: Read>(mut reader: R) -> ReadResult<Matrix> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| ReadError::FileOpen {
            path: "<reader>".into(),
            source,
        })?;

    Ok(parse_bytes(&bytes)?.matrix)
}

/// Read and parse a matrix file.
///
/// The file handle is released before parsing starts.
///
/// # Example
/// ```ignore
/// let result = read_matrix_file("inputMatrix.txt")?;
/// println!("{} ({})", result.matrix.shape(), result.encoding);
/// ```
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> ReadResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ReadError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    parse_bytes(&bytes)
}
