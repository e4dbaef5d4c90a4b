//! Graph commands for rota
//!
//! - `rota show --graph <file>` - adjacency listing
//! - `rota path --graph <file> <start> <end>` - shortest path
//! - `rota mst --graph <file>` - minimum spanning tree / forest
//! - `rota euler --graph <file>` - Eulerian path and circuit feasibility

pub mod euler;
pub mod mst;
pub mod path;
pub mod show;

use std::time::Instant;

use rota_core::config::RotaConfig;
use rota_core::error::Result;
use rota_core::graph::{load_graph, Graph};
use rota_core::trace_time;

use crate::cli::GraphArgs;

/// Load the graph document named on the command line.
///
/// `--directed` overrides the configured default direction for unflagged edges.
pub fn load(args: &GraphArgs, config: &RotaConfig) -> Result<Graph> {
    let start = Instant::now();
    let bidirectional = config.graph.bidirectional && !args.directed;

    let graph = load_graph(&args.graph, bidirectional)?;

    trace_time!(start, "load_graph", vertices = graph.vertex_count());
    Ok(graph)
}
