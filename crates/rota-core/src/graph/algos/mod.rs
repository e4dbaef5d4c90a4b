//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest path with path reconstruction
//! - `kruskal`: minimum spanning tree / forest
//! - `disjoint_set`: union-find used by `kruskal`
//! - `euler`: degree-based Eulerian path and circuit tests

pub mod dijkstra;
pub mod disjoint_set;
pub mod euler;
pub mod kruskal;

pub use dijkstra::shortest_path;
pub use disjoint_set::DisjointSet;
pub use euler::{
    analyze, edges_connected, has_eulerian_circuit, has_eulerian_path, odd_degree_vertices,
    vertex_degrees,
};
pub use kruskal::minimum_spanning_tree;
