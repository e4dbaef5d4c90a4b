//! Show command: adjacency listing of a graph
use rota_core::config::RotaConfig;
use rota_core::error::Result;
use rota_core::graph::Graph;

use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the show command
pub fn execute(cli: &Cli, config: &RotaConfig, args: &GraphArgs) -> Result<()> {
    let graph = super::load(args, config)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_json(&graph))?);
        }
        OutputFormat::Human => {
            if graph.is_empty() {
                if !cli.quiet {
                    println!("Graph is empty");
                }
            } else {
                println!("{}", graph);
            }
        }
    }

    Ok(())
}

fn to_json(graph: &Graph) -> serde_json::Value {
    let vertices: Vec<serde_json::Value> = graph
        .vertices()
        .map(|label| {
            serde_json::json!({
                "label": label,
                "neighbors": graph.neighbors(label),
            })
        })
        .collect();

    serde_json::json!({
        "vertex_count": graph.vertex_count(),
        "arc_count": graph.arc_count(),
        "vertices": vertices,
    })
}
