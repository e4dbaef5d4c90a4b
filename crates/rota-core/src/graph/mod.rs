//! Weighted graph and the algorithms that run over it
//!
//! - `Graph`: adjacency-list container filled by the persistence layer
//! - Dijkstra shortest path between two labelled vertices
//! - Kruskal minimum spanning tree (or forest)
//! - Degree-based Eulerian path/circuit analysis
//! - Graph provider trait for read-only algorithm input

pub mod adjacency;
pub mod algos;
pub mod load;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::{
    analyze, has_eulerian_circuit, has_eulerian_path, minimum_spanning_tree, shortest_path,
    DisjointSet,
};
pub use load::{load_graph, EdgeRecord, GraphDocument, VertexRecord};
pub use traversal::GraphProvider;
pub use types::{EulerianReport, MstEdge, Neighbor, PathResult, SpanningForest};
