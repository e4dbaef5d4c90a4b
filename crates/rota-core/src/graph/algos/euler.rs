//! Degree-based Eulerian path and circuit feasibility.
//!
//! The degree of a vertex is the length of its adjacency list. The two predicates look
//! at degrees only and assume the edges form a single connected component; a graph made
//! of two disjoint even cycles is reported as having a circuit. [`edges_connected`]
//! checks that assumption separately and [`analyze`] reports it next to the predicates.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::graph::types::EulerianReport;
use crate::graph::GraphProvider;

/// Degree of every vertex, keyed by label
pub fn vertex_degrees<'g>(graph: &'g dyn GraphProvider) -> BTreeMap<&'g str, usize> {
    graph
        .vertex_labels()
        .into_iter()
        .map(|v| (v, graph.arcs(v).len()))
        .collect()
}

/// Labels of vertices with odd degree, in label order
pub fn odd_degree_vertices(graph: &dyn GraphProvider) -> Vec<String> {
    vertex_degrees(graph)
        .into_iter()
        .filter(|(_, degree)| degree % 2 != 0)
        .map(|(v, _)| v.to_string())
        .collect()
}

/// True when the odd-degree vertex count is 0 or 2.
///
/// A graph without edges has a (trivial) path only when it is a single vertex.
pub fn has_eulerian_path(graph: &dyn GraphProvider) -> bool {
    let degrees = vertex_degrees(graph);
    if degrees.is_empty() {
        return false;
    }
    if degrees.values().all(|&d| d == 0) {
        return degrees.len() == 1;
    }

    let odd = degrees.values().filter(|&&d| d % 2 != 0).count();
    odd == 0 || odd == 2
}

/// True when there is at least one edge and every degree is even.
pub fn has_eulerian_circuit(graph: &dyn GraphProvider) -> bool {
    let degrees = vertex_degrees(graph);
    if !degrees.values().any(|&d| d > 0) {
        return false;
    }
    degrees.values().all(|&d| d % 2 == 0)
}

/// Whether all vertices with positive degree share one component, arcs taken as undirected.
///
/// Vacuously true when there are no edges.
pub fn edges_connected(graph: &dyn GraphProvider) -> bool {
    let mut undirected: HashMap<&str, Vec<&str>> = HashMap::new();
    for v in graph.vertex_labels() {
        for arc in graph.arcs(v) {
            undirected.entry(v).or_default().push(arc.node.as_str());
            undirected.entry(arc.node.as_str()).or_default().push(v);
        }
    }

    let Some(&first) = undirected.keys().min() else {
        return true;
    };

    let mut seen: HashSet<&str> = HashSet::from([first]);
    let mut stack = vec![first];
    while let Some(v) = stack.pop() {
        for &next in undirected.get(v).into_iter().flatten() {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }

    seen.len() == undirected.len()
}

/// Both predicates plus the data behind them.
#[tracing::instrument(skip(graph))]
pub fn analyze(graph: &dyn GraphProvider) -> EulerianReport {
    let report = EulerianReport {
        has_path: has_eulerian_path(graph),
        has_circuit: has_eulerian_circuit(graph),
        odd_degree_vertices: odd_degree_vertices(graph),
        edges_connected: edges_connected(graph),
    };

    tracing::debug!(
        has_path = report.has_path,
        has_circuit = report.has_circuit,
        odd = report.odd_degree_vertices.len(),
        edges_connected = report.edges_connected,
        "eulerian analysis"
    );
    report
}
