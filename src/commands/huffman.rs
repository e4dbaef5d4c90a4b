//! Huffman commands for rota
//!
//! - `rota huffman encode <text>` - compress text to a bit string
//! - `rota huffman decode <bits> --codes <file>` - restore text from a saved code map
//! - `rota huffman codes <text>` - frequency table and code per character
//!
//! Code maps are stored as JSON: `{"codes": {"a": "0", "b": "10", ...}}`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rota_core::config::RotaConfig;
use rota_core::error::{Result, RotaError};
use rota_core::huffman::{
    build_frequency_table, build_tree, decode, encode, encode_strict, generate_codes, CodeMap,
    HuffmanTree,
};

use crate::cli::{Cli, OutputFormat};

/// On-disk form of a code map. JSON object keys are strings, so each key holds one character.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CodesFile {
    codes: BTreeMap<String, String>,
}

impl CodesFile {
    fn from_map(codes: &CodeMap<char>) -> Self {
        Self {
            codes: codes
                .iter()
                .map(|(symbol, code)| (symbol.to_string(), code.clone()))
                .collect(),
        }
    }

    fn into_map(self) -> Result<CodeMap<char>> {
        let mut map = CodeMap::new();
        for (key, code) in self.codes {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => {
                    map.insert(symbol, code);
                }
                _ => {
                    return Err(RotaError::invalid_value(
                        "code map key",
                        format!("{:?} (expected exactly one character)", key),
                    ))
                }
            }
        }
        Ok(map)
    }
}

fn read_codes(path: &Path) -> Result<CodeMap<char>> {
    let content = fs::read_to_string(path)?;
    let file: CodesFile = serde_json::from_str(&content)?;
    let codes = file.into_map()?;
    debug!(path = %path.display(), symbols = codes.len(), "read code map");
    Ok(codes)
}

fn write_codes(path: &Path, codes: &CodeMap<char>) -> Result<()> {
    let json = serde_json::to_string_pretty(&CodesFile::from_map(codes))?;
    fs::write(path, json + "\n")?;
    debug!(path = %path.display(), symbols = codes.len(), "wrote code map");
    Ok(())
}

fn codes_for_text(text: &str) -> CodeMap<char> {
    build_tree(&build_frequency_table(text.chars()))
        .map(|tree| generate_codes(&tree))
        .unwrap_or_default()
}

/// Execute `huffman encode`
///
/// Without `--codes` the code map is built from the text itself and every character
/// encodes. With a saved map, characters it lacks are skipped unless strict mode is on
/// (`--strict` or `huffman.strict_symbols` in the config).
pub fn execute_encode(
    cli: &Cli,
    config: &RotaConfig,
    text: &str,
    codes_path: Option<&Path>,
    save_codes: Option<&Path>,
    strict: bool,
) -> Result<()> {
    let codes = match codes_path {
        Some(path) => read_codes(path)?,
        None => codes_for_text(text),
    };

    let bits = if strict || config.huffman.strict_symbols {
        encode_strict(text.chars(), &codes)?
    } else {
        encode(text.chars(), &codes)
    };

    if let Some(path) = save_codes {
        write_codes(path, &codes)?;
    }

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "bits": bits,
                "length": bits.len(),
                "input_length": text.chars().count(),
                "codes": CodesFile::from_map(&codes).codes,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("{}", bits);
            if let Some(path) = save_codes {
                if !cli.quiet {
                    eprintln!("saved {} codes to {}", codes.len(), path.display());
                }
            }
        }
    }

    Ok(())
}

/// Execute `huffman decode`
pub fn execute_decode(cli: &Cli, bits: &str, codes_path: &Path) -> Result<()> {
    let codes = read_codes(codes_path)?;
    let tree = HuffmanTree::from_codes(&codes)?;
    let text: String = decode(bits, tree.as_ref())?.into_iter().collect();

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "text": text,
                "length": text.chars().count(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("{}", text);
        }
    }

    Ok(())
}

/// Execute `huffman codes`
pub fn execute_codes(cli: &Cli, text: &str) -> Result<()> {
    let table = build_frequency_table(text.chars());
    let codes = build_tree(&table)
        .map(|tree| generate_codes(&tree))
        .unwrap_or_default();

    match cli.format {
        OutputFormat::Json => {
            let symbols: Vec<serde_json::Value> = table
                .iter()
                .map(|(symbol, frequency)| {
                    serde_json::json!({
                        "symbol": symbol.to_string(),
                        "frequency": frequency,
                        "code": codes.get(symbol),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&symbols)?);
        }
        OutputFormat::Human => {
            if table.is_empty() {
                if !cli.quiet {
                    println!("No symbols");
                }
                return Ok(());
            }
            for (symbol, frequency) in &table {
                let code = codes.get(symbol).map(String::as_str).unwrap_or("");
                println!("{:?}\t{}\t{}", symbol, frequency, code);
            }
        }
    }

    Ok(())
}
