use crate::error::{Result, RotaError};
use crate::graph::types::PathResult;
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then insertion order)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    pub distance: f64,
    pub sequence: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// State tracked during a single Dijkstra query
struct DijkstraState {
    distances: HashMap<String, f64>,
    predecessors: HashMap<String, String>,
    visited: HashSet<String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_sequence: u64,
}

impl DijkstraState {
    fn new() -> Self {
        Self {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            visited: HashSet::new(),
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    fn push(&mut self, node_id: String, distance: f64) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            distance,
            sequence: self.next_sequence,
        }));
        self.next_sequence += 1;
    }

    /// Record `node` reached via `from` at `distance` if that improves on what is known.
    fn relax(&mut self, from: &str, node: &str, distance: f64) {
        if distance < self.distance(node) {
            self.distances.insert(node.to_string(), distance);
            self.predecessors.insert(node.to_string(), from.to_string());
            self.push(node.to_string(), distance);
        }
    }
}

/// Follow predecessor links from `end` back to `start`.
///
/// Returns `None` if the chain does not lead back to `start`.
fn reconstruct_path(
    start: &str,
    end: &str,
    predecessors: &HashMap<String, String>,
) -> Option<Vec<String>> {
    let mut path = vec![end.to_string()];
    let mut current = end;

    while let Some(pred) = predecessors.get(current) {
        // A chain longer than the number of recorded links is a cycle.
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(pred.clone());
        current = pred.as_str();
    }

    path.reverse();
    (path.first().map(String::as_str) == Some(start)).then_some(path)
}

/// Shortest path from `start` to `end`.
///
/// Both vertices must be in the graph, otherwise `UnknownVertex` is returned.
/// Edge weights must be non-negative. An unreachable `end` yields
/// [`PathResult::no_path`], which is not an error.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn shortest_path(graph: &dyn GraphProvider, start: &str, end: &str) -> Result<PathResult> {
    for label in [start, end] {
        if !graph.has_vertex(label) {
            return Err(RotaError::unknown_vertex(label));
        }
    }

    let mut state = DijkstraState::new();
    state.distances.insert(start.to_string(), 0.0);
    state.push(start.to_string(), 0.0);

    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        distance,
        ..
    })) = state.heap.pop()
    {
        // Stale entry superseded by a shorter distance
        if distance > state.distance(&current_id) || !state.visited.insert(current_id.clone()) {
            continue;
        }

        if current_id == end {
            break;
        }

        for arc in graph.arcs(&current_id) {
            tracing::trace!(from = %current_id, to = %arc.node, weight = arc.weight, "relax");
            state.relax(&current_id, &arc.node, distance + arc.weight);
        }
    }

    let distance = state.distance(end);
    if distance.is_infinite() {
        tracing::debug!("no path");
        return Ok(PathResult::no_path());
    }

    match reconstruct_path(start, end, &state.predecessors) {
        Some(path) => {
            tracing::debug!(distance, hops = path.len().saturating_sub(1), "path found");
            Ok(PathResult { distance, path })
        }
        None => {
            tracing::warn!("predecessor chain does not reach start");
            Ok(PathResult::no_path())
        }
    }
}
