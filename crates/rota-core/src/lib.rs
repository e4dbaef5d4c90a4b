//! Rota Core Library
//!
//! Graph algorithms and prefix-code compression behind the rota logistics toolkit:
//! shortest routes, minimum spanning networks, Eulerian route feasibility and
//! Huffman coding of route data.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod huffman;
pub mod logging;
