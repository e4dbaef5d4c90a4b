//! Command dispatch logic for rota

use std::env;
use std::time::Instant;

use rota_core::config::RotaConfig;
use rota_core::error::Result;
use rota_core::{bail_usage, trace_time};

use crate::cli::{Cli, Commands, HuffmanCommands};
use crate::commands::{graph, huffman};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = RotaConfig::discover(cli.config.as_deref(), &cwd)?;

    trace_time!(start, "load_config");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Show(args)) => graph::show::execute(cli, &config, args),

        Some(Commands::Path {
            graph: args,
            start: from,
            end: to,
        }) => graph::path::execute(cli, &config, args, from, to),

        Some(Commands::Mst(args)) => graph::mst::execute(cli, &config, args),

        Some(Commands::Euler(args)) => graph::euler::execute(cli, &config, args),

        Some(Commands::Huffman { command }) => match command {
            HuffmanCommands::Encode {
                text,
                codes,
                save_codes,
                strict,
            } => huffman::execute_encode(
                cli,
                &config,
                text,
                codes.as_deref(),
                save_codes.as_deref(),
                *strict,
            ),
            HuffmanCommands::Decode { bits, codes } => huffman::execute_decode(cli, bits, codes),
            HuffmanCommands::Codes { text } => huffman::execute_codes(cli, text),
        },
    }
}

fn handle_no_command() -> Result<()> {
    bail_usage!("no command given (run `rota --help` for usage)")
}
