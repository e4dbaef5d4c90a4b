//! Euler command: Eulerian path and circuit feasibility
use rota_core::config::RotaConfig;
use rota_core::error::Result;
use rota_core::graph::analyze;

use crate::cli::{Cli, GraphArgs, OutputFormat};

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Execute the euler command
pub fn execute(cli: &Cli, config: &RotaConfig, args: &GraphArgs) -> Result<()> {
    let graph = super::load(args, config)?;
    let report = analyze(&graph);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("eulerian path: {}", yes_no(report.has_path));
            println!("eulerian circuit: {}", yes_no(report.has_circuit));
            if !report.odd_degree_vertices.is_empty() {
                println!(
                    "odd-degree vertices: {}",
                    report.odd_degree_vertices.join(", ")
                );
            }
            println!("edges connected: {}", yes_no(report.edges_connected));
            if !report.edges_connected && !cli.quiet {
                eprintln!(
                    "warning: edges form more than one component; the degree test assumes one"
                );
            }
        }
    }

    Ok(())
}
