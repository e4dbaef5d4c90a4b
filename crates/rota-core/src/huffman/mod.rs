//! Huffman prefix-code compression
//!
//! Pipeline: symbol sequence -> frequency table -> code tree -> code map -> encode.
//! Decoding walks the tree. Bit strings are sequences of `'0'`/`'1'` characters.
//! All functions are generic over the symbol type; text uses `char`.

pub mod codec;
pub mod tree;

pub use codec::{decode, encode, encode_strict, generate_codes};
pub use tree::{
    build_frequency_table, build_tree, CodeMap, FrequencyTable, HuffmanNode, HuffmanTree,
};
