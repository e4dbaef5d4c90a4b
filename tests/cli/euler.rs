use crate::cli::support::{rota, stdout_json, write_graph, CYCLE_JSON};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Eulerian analysis tests
// ============================================================================

#[test]
fn test_cycle_has_circuit() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.json", CYCLE_JSON);

    rota()
        .current_dir(dir.path())
        .args(["euler", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("eulerian path: yes"))
        .stdout(predicate::str::contains("eulerian circuit: yes"))
        .stdout(predicate::str::contains("odd-degree vertices").not());
}

#[test]
fn test_open_route_has_path_only() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "route.json",
        r#"{"edges": [
            {"from": "A", "to": "B", "weight": 1},
            {"from": "B", "to": "C", "weight": 1},
            {"from": "C", "to": "D", "weight": 1}
        ]}"#,
    );

    rota()
        .current_dir(dir.path())
        .args(["euler", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("eulerian path: yes"))
        .stdout(predicate::str::contains("eulerian circuit: no"))
        .stdout(predicate::str::contains("odd-degree vertices: A, D"));
}

#[test]
fn test_euler_json_report() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "two.json",
        r#"{"edges": [
            {"from": "A", "to": "B", "weight": 1},
            {"from": "B", "to": "C", "weight": 1},
            {"from": "C", "to": "A", "weight": 1},
            {"from": "X", "to": "Y", "weight": 1},
            {"from": "Y", "to": "Z", "weight": 1},
            {"from": "Z", "to": "X", "weight": 1}
        ]}"#,
    );

    let output = rota()
        .current_dir(dir.path())
        .args(["--format", "json", "euler", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["has_circuit"], true);
    assert_eq!(json["has_path"], true);
    assert_eq!(json["edges_connected"], false);
    assert_eq!(json["odd_degree_vertices"], serde_json::json!([]));
}
