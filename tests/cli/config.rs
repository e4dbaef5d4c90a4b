use crate::cli::support::{rota, write_graph, SCENARIO_JSON};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_discovered_config_sets_edge_direction() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "net.json", SCENARIO_JSON);
    fs::write(dir.path().join("rota.toml"), "[graph]\nbidirectional = false\n").unwrap();

    rota()
        .current_dir(dir.path())
        .args(["path", "--graph"])
        .arg(&graph)
        .args(["C", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from C to A"));
}

#[test]
fn test_explicit_config_enables_strict_symbols() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("strict.toml");
    fs::write(&config, "[huffman]\nstrict_symbols = true\n").unwrap();
    let codes = dir.path().join("codes.json");
    fs::write(&codes, r#"{"codes": {"a": "0", "b": "1"}}"#).unwrap();

    rota()
        .current_dir(dir.path())
        .args(["--config"])
        .arg(&config)
        .args(["huffman", "encode", "abz", "--codes"])
        .arg(&codes)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("symbol has no code: z"));
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "net.json", SCENARIO_JSON);
    let config = dir.path().join("oneway.toml");
    fs::write(&config, "[graph]\nbidirectional = false\n").unwrap();

    rota()
        .current_dir(dir.path())
        .env("ROTA_CONFIG", &config)
        .args(["path", "--graph"])
        .arg(&graph)
        .args(["C", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from C to A"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();

    rota()
        .current_dir(dir.path())
        .args(["--config", "nowhere.toml", "huffman", "codes", "abc"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config path"));
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("rota.toml"), "[graph\n").unwrap();

    rota()
        .current_dir(dir.path())
        .args(["huffman", "codes", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
