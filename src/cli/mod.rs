//! CLI argument parsing for rota
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod huffman;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::GraphArgs;
pub use huffman::HuffmanCommands;
use parse::parse_format;
pub use rota_core::format::OutputFormat;

/// Rota - route graph analysis and prefix-code compression
#[derive(Parser, Debug)]
#[command(name = "rota")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./rota.toml when present)
    #[arg(long, global = true, env = "ROTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency listing of a graph
    Show(GraphArgs),

    /// Find the shortest path between two vertices
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start vertex label
        start: String,

        /// End vertex label
        end: String,
    },

    /// Compute a minimum spanning tree (a forest for disconnected graphs)
    Mst(GraphArgs),

    /// Check whether an Eulerian path or circuit can exist
    Euler(GraphArgs),

    /// Huffman-encode and decode text
    Huffman {
        #[command(subcommand)]
        command: HuffmanCommands,
    },
}
