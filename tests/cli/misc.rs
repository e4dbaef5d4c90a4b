use crate::cli::support::{rota, stderr_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Error envelope and global flag tests
// ============================================================================

#[test]
fn test_json_error_envelope_for_parse_failure() {
    let output = rota()
        .args(["--format", "json", "path", "--bogus"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_json_error_envelope_for_command_failure() {
    let dir = tempdir().unwrap();

    let output = rota()
        .current_dir(dir.path())
        .args(["--format=json", "show", "--graph", "absent.json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "io_error");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .args(["--quiet", "show", "--graph", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_format_is_case_insensitive() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .args(["--format", "JSON", "huffman", "encode", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bits\""));
}
