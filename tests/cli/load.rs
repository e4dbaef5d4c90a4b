use crate::cli::support::{rota, stderr_json, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Graph document loading tests
// ============================================================================

#[test]
fn test_toml_document() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "net.toml",
        r#"
[[vertices]]
label = "A"

[vertices.attributes]
kind = "warehouse"

[[edges]]
from = "A"
to = "B"
weight = 1.5

[[edges]]
from = "B"
to = "C"
weight = 2.0
"#,
    );

    rota()
        .current_dir(dir.path())
        .args(["path", "--graph"])
        .arg(&graph)
        .args(["A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"))
        .stdout(predicate::str::contains("distance: 3.5"));
}

#[test]
fn test_yaml_document() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "net.yaml",
        r#"
vertices:
  - label: A
    attributes:
      lat: 38.7
      lon: -9.1
  - label: B
edges:
  - from: A
    to: B
    weight: 7
    bidirectional: false
"#,
    );

    rota()
        .current_dir(dir.path())
        .args(["path", "--graph"])
        .arg(&graph)
        .args(["B", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from B to A"));
}

#[test]
fn test_negative_weight_is_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "net.json",
        r#"{"edges": [{"from": "A", "to": "B", "weight": -1}]}"#,
    );

    rota()
        .current_dir(dir.path())
        .args(["show", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge weight"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "net.csv", "A,B,1");

    let output = rota()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "invalid_value");
}

#[test]
fn test_malformed_json_is_failure() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "net.json", "{\"edges\": [");

    rota()
        .current_dir(dir.path())
        .args(["show", "--graph"])
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}
