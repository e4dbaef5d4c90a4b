use std::collections::HashSet;

use crate::error::Result;
use crate::graph::algos::disjoint_set::DisjointSet;
use crate::graph::types::{MstEdge, SpanningForest};
use crate::graph::GraphProvider;

/// Unordered vertex pair used to collapse the two arcs of an undirected edge
fn canonical_pair<'a>(u: &'a str, v: &'a str) -> (&'a str, &'a str) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Candidate edges in discovery order, one per unordered vertex pair.
///
/// Vertices are visited in the provider's order and arcs in insertion order; the
/// first arc seen for a pair wins.
fn candidate_edges(graph: &dyn GraphProvider) -> Vec<MstEdge> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut edges = Vec::new();

    for u in graph.vertex_labels() {
        for arc in graph.arcs(u) {
            if seen.insert(canonical_pair(u, &arc.node)) {
                edges.push(MstEdge {
                    from: u.to_string(),
                    to: arc.node.clone(),
                    weight: arc.weight,
                });
            }
        }
    }

    edges
}

/// Minimum spanning tree by Kruskal's algorithm.
///
/// A disconnected graph yields a spanning forest with fewer than `|V| - 1` edges;
/// use [`SpanningForest::is_spanning`] to tell the two apart.
#[tracing::instrument(skip(graph))]
pub fn minimum_spanning_tree(graph: &dyn GraphProvider) -> Result<SpanningForest> {
    let vertices = graph.vertex_labels();
    let mut candidates = candidate_edges(graph);
    // Stable: equal weights keep discovery order
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = DisjointSet::new(vertices.iter().copied());
    let mut forest = SpanningForest::default();

    for edge in candidates {
        if sets.union(&edge.from, &edge.to)? {
            tracing::trace!(from = %edge.from, to = %edge.to, weight = edge.weight, "accept");
            forest.total_cost += edge.weight;
            forest.edges.push(edge);
        } else {
            tracing::trace!(from = %edge.from, to = %edge.to, "skip cycle");
        }
    }

    tracing::debug!(
        edges = forest.edges.len(),
        total_cost = forest.total_cost,
        spanning = forest.is_spanning(vertices.len()),
        "spanning forest built"
    );
    Ok(forest)
}
