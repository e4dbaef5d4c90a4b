use clap::Args;
use std::path::PathBuf;

/// Graph input shared by the graph commands
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (.json, .toml, .yaml or .yml)
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Load edges without an explicit `bidirectional` flag as one-way arcs
    #[arg(long)]
    pub directed: bool,
}
