use serde::Serialize;

use crate::format::distance_json;

/// One outgoing arc in an adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub node: String,
    pub weight: f64,
}

impl Neighbor {
    pub fn new(node: impl Into<String>, weight: f64) -> Self {
        Self {
            node: node.into(),
            weight,
        }
    }
}

/// Result of a shortest path query
///
/// An unreachable target is a normal outcome: `distance` is infinite and `path` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub distance: f64,
    pub path: Vec<String>,
}

impl PathResult {
    pub fn no_path() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.distance.is_finite() && !self.path.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "found": self.is_found(),
            "distance": distance_json(self.distance),
            "path": self.path,
        })
    }
}

/// An undirected edge accepted into a spanning tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Minimum spanning tree, or forest when the graph is disconnected
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SpanningForest {
    pub edges: Vec<MstEdge>,
    pub total_cost: f64,
}

impl SpanningForest {
    /// True when the edges connect all `vertex_count` vertices.
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

/// Degree-based Eulerian feasibility summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EulerianReport {
    pub has_path: bool,
    pub has_circuit: bool,
    /// Vertices with odd degree, sorted by label
    pub odd_degree_vertices: Vec<String>,
    /// Whether every vertex with positive degree lies in one component.
    /// The two predicates above do not consult this.
    pub edges_connected: bool,
}
