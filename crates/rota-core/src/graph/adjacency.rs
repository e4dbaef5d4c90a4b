//! Adjacency-list weighted graph

use std::collections::BTreeMap;
use std::fmt;

use crate::graph::types::Neighbor;

/// Weighted graph stored as an adjacency list.
///
/// Vertices are kept in label order; each vertex's outgoing arcs keep insertion order.
/// An undirected edge is two arcs. Self-loops and parallel arcs are kept as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<String, Vec<Neighbor>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex if absent. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, label: impl Into<String>) {
        self.adjacency.entry(label.into()).or_default();
    }

    /// Add an arc `u -> v`, and `v -> u` as well when `bidirectional`.
    ///
    /// Missing endpoints are created. Weights are expected to be non-negative;
    /// [`crate::graph::shortest_path`] is undefined for negative weights.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64, bidirectional: bool) {
        self.add_vertex(u);
        self.add_vertex(v);

        self.adjacency
            .entry(u.to_string())
            .or_default()
            .push(Neighbor::new(v, weight));
        if bidirectional {
            self.adjacency
                .entry(v.to_string())
                .or_default()
                .push(Neighbor::new(u, weight));
        }
    }

    /// Outgoing arcs of `vertex` in insertion order; empty for unknown or isolated vertices.
    pub fn neighbors(&self, vertex: &str) -> &[Neighbor] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All vertex labels, in label order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored arcs (a bidirectional edge counts twice).
    pub fn arc_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Length of the adjacency list of `vertex`.
    pub fn degree(&self, vertex: &str) -> usize {
        self.neighbors(vertex).len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (vertex, arcs) in &self.adjacency {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}:", vertex)?;
            for arc in arcs {
                write!(f, "\n -> {} (weight: {})", arc.node, arc.weight)?;
            }
        }
        Ok(())
    }
}
