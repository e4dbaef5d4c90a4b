//! Mst command: minimum spanning tree or forest
use rota_core::config::RotaConfig;
use rota_core::error::Result;
use rota_core::graph::minimum_spanning_tree;

use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the mst command
pub fn execute(cli: &Cli, config: &RotaConfig, args: &GraphArgs) -> Result<()> {
    let graph = super::load(args, config)?;
    let forest = minimum_spanning_tree(&graph)?;
    let vertex_count = graph.vertex_count();
    let spanning = forest.is_spanning(vertex_count);

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "edges": forest.edges,
                "total_cost": forest.total_cost,
                "vertex_count": vertex_count,
                "spanning": spanning,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            for edge in &forest.edges {
                println!("{} -- {} ({})", edge.from, edge.to, edge.weight);
            }
            println!("total cost: {}", forest.total_cost);
            if !spanning && !cli.quiet {
                println!(
                    "graph is disconnected: spanning forest of {} edges over {} vertices",
                    forest.edges.len(),
                    vertex_count
                );
            }
        }
    }

    Ok(())
}
