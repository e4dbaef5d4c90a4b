//! Path command: shortest path between two vertices
use rota_core::config::RotaConfig;
use rota_core::error::Result;
use rota_core::graph::{shortest_path, PathResult};

use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the path command
///
/// An unreachable target is reported, not treated as a failure.
pub fn execute(
    cli: &Cli,
    config: &RotaConfig,
    args: &GraphArgs,
    from: &str,
    to: &str,
) -> Result<()> {
    let graph = super::load(args, config)?;
    let result = shortest_path(&graph, from, to)?;

    match cli.format {
        OutputFormat::Json => {
            let mut json = result.to_json();
            if let Some(obj) = json.as_object_mut() {
                obj.insert("start".to_string(), serde_json::json!(from));
                obj.insert("end".to_string(), serde_json::json!(to));
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => output_human(&result, from, to),
    }

    Ok(())
}

fn output_human(result: &PathResult, from: &str, to: &str) {
    if !result.is_found() {
        println!("No path from {} to {}", from, to);
        return;
    }

    println!("{}", result.path.join(" -> "));
    println!("distance: {}", result.distance);
}
