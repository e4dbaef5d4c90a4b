//! CLI commands for rota

pub mod dispatch;
pub mod graph;
pub mod huffman;
