use crate::cli::support::{rota, stdout_json, write_graph, SCENARIO_JSON};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Minimum spanning tree tests
// ============================================================================

#[test]
fn test_mst_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "net.json", SCENARIO_JSON);

    rota()
        .current_dir(dir.path())
        .args(["mst", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("A -- B (1)"))
        .stdout(predicate::str::contains("B -- C (2)"))
        .stdout(predicate::str::contains("total cost: 3"))
        .stdout(predicate::str::contains("disconnected").not());
}

#[test]
fn test_mst_json_drops_cycle_edge() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "net.json",
        r#"{"edges": [
            {"from": "A", "to": "B", "weight": 1},
            {"from": "B", "to": "C", "weight": 2},
            {"from": "A", "to": "C", "weight": 5}
        ]}"#,
    );

    let output = rota()
        .current_dir(dir.path())
        .args(["--format", "json", "mst", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["total_cost"], 3.0);
    assert_eq!(json["spanning"], true);
    assert_eq!(json["vertex_count"], 3);
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0]["from"], "A");
    assert_eq!(edges[0]["to"], "B");
    assert!(edges.iter().all(|e| e["weight"] != 5.0));
}

#[test]
fn test_mst_disconnected_graph_is_forest() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "net.json",
        r#"{"vertices": [{"label": "E"}],
            "edges": [
                {"from": "A", "to": "B", "weight": 1},
                {"from": "C", "to": "D", "weight": 2}
            ]}"#,
    );

    rota()
        .current_dir(dir.path())
        .args(["mst", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("total cost: 3"))
        .stdout(predicate::str::contains("graph is disconnected"));

    let output = rota()
        .current_dir(dir.path())
        .args(["--format", "json", "mst", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["spanning"], false);
}
