//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "rota.toml";

/// Top-level rota configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RotaConfig {
    /// Graph document loading
    #[serde(default)]
    pub graph: GraphConfig,

    /// Huffman encoding behavior
    #[serde(default)]
    pub huffman: HuffmanConfig,
}

/// Configuration for loading graph documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Direction for edges that do not state their own `bidirectional` flag
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            bidirectional: default_bidirectional(),
        }
    }
}

/// Configuration for Huffman encoding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HuffmanConfig {
    /// Fail on symbols missing from a supplied code map instead of skipping them
    #[serde(default)]
    pub strict_symbols: bool,
}

fn default_bidirectional() -> bool {
    true
}
