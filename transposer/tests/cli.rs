//! End-to-end tests for the `transposer` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn transposer(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_transposer"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run transposer")
}

// ============================================================================
// Default file names
// ============================================================================

#[test]
fn test_default_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("inputMatrix.txt"), "1,2\n3,4\n5,6\n").unwrap();

    let out = transposer(dir.path(), &[]);

    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("outputMatrix.txt")).unwrap(),
        "1,3,5\n2,4,6\n"
    );
}

#[test]
fn test_missing_input_exits_nonzero() {
    let dir = tempdir().unwrap();

    let out = transposer(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unable to open file to read"));
    assert_eq!(stderr.lines().count(), 1);
    assert!(!dir.path().join("outputMatrix.txt").exists());
}

// ============================================================================
// Explicit paths and flags
// ============================================================================

#[test]
fn test_explicit_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("row.txt"), "1,2,3").unwrap();

    let out = transposer(dir.path(), &["row.txt", "column.txt"]);

    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("column.txt")).unwrap(),
        "1\n2\n3\n"
    );
}

#[test]
fn test_json_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("inputMatrix.txt"), "a,b,c\nd,e,f\n").unwrap();

    let out = transposer(dir.path(), &["--json"]);

    assert!(out.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["input_shape"]["rows"], 2);
    assert_eq!(summary["input_shape"]["columns"], 3);
    assert_eq!(summary["output_shape"]["rows"], 3);
}

#[test]
fn test_ragged_input_exits_nonzero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("inputMatrix.txt"), "1,2\n3,4,5\n").unwrap();

    let out = transposer(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
    assert!(!dir.path().join("outputMatrix.txt").exists());
}

#[test]
fn test_unwritable_output_exits_nonzero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("inputMatrix.txt"), "1\n").unwrap();

    let out = transposer(dir.path(), &["inputMatrix.txt", "missing/out.txt"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unable to open file to write"));
}
