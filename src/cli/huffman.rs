//! Huffman subcommands for compressing text into bit strings

use clap::Subcommand;
use std::path::PathBuf;

/// Huffman subcommands
#[derive(Subcommand, Debug)]
pub enum HuffmanCommands {
    /// Encode text into a bit string
    Encode {
        /// Text to encode
        text: String,

        /// Encode with a saved code map instead of one built from the text
        #[arg(long)]
        codes: Option<PathBuf>,

        /// Write the code map used for encoding to this file (JSON)
        #[arg(long)]
        save_codes: Option<PathBuf>,

        /// Fail on characters missing from the code map instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Decode a bit string with a saved code map
    Decode {
        /// Bit string of 0 and 1 characters
        bits: String,

        /// Code map written by `encode --save-codes`
        #[arg(long, required = true)]
        codes: PathBuf,
    },

    /// Show the frequency table and codes for text
    Codes {
        /// Text to analyze
        text: String,
    },
}
