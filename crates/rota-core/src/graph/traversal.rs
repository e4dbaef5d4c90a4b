use crate::graph::adjacency::Graph;
use crate::graph::types::Neighbor;

/// Read-only view of a weighted graph consumed by the algorithms
pub trait GraphProvider {
    /// Vertex labels in a stable order
    fn vertex_labels(&self) -> Vec<&str>;
    /// Outgoing arcs of a vertex in insertion order
    fn arcs(&self, vertex: &str) -> &[Neighbor];
    fn has_vertex(&self, vertex: &str) -> bool;
}

impl GraphProvider for Graph {
    fn vertex_labels(&self) -> Vec<&str> {
        self.vertices().collect()
    }

    fn arcs(&self, vertex: &str) -> &[Neighbor] {
        self.neighbors(vertex)
    }

    fn has_vertex(&self, vertex: &str) -> bool {
        self.contains(vertex)
    }
}
