use crate::cli::support::rota;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ROTA_LOG")
        .args(["--log-level", "debug", "huffman", "codes", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ROTA_LOG")
        .args(["--log-level", "warn", "huffman", "codes", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ROTA_LOG")
        .args(["--verbose", "huffman", "codes", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_is_quiet() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ROTA_LOG")
        .args(["huffman", "codes", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_rota_log_environment_variable() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("ROTA_LOG", "rota=debug")
        .args(["huffman", "codes", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    let output = rota()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ROTA_LOG")
        .args(["--log-json", "--log-level", "debug", "huffman", "codes", "abc"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("level").is_some());
    }
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ROTA_LOG")
        .args(["--log-level", "trace", "huffman", "encode", "aaabbc"])
        .assert()
        .success()
        .stdout("000111110\n");
}
