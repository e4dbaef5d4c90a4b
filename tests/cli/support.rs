use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Get a Command for rota
pub fn rota() -> Command {
    cargo_bin_cmd!("rota")
}

/// A-B weight 1, B-C weight 2, both two-way
pub const SCENARIO_JSON: &str = r#"{
  "vertices": [
    {"label": "A", "attributes": {"name": "Depot"}},
    {"label": "B"},
    {"label": "C"}
  ],
  "edges": [
    {"from": "A", "to": "B", "weight": 1},
    {"from": "B", "to": "C", "weight": 2}
  ]
}"#;

/// Square A-B-C-D-A, all weight 1
pub const CYCLE_JSON: &str = r#"{
  "vertices": [{"label": "A"}, {"label": "B"}, {"label": "C"}, {"label": "D"}],
  "edges": [
    {"from": "A", "to": "B", "weight": 1},
    {"from": "B", "to": "C", "weight": 1},
    {"from": "C", "to": "D", "weight": 1},
    {"from": "D", "to": "A", "weight": 1}
  ]
}"#;

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Parse stderr as JSON
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not JSON")
}
