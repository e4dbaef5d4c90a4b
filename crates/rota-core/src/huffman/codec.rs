//! Code map derivation, encoding and decoding

use std::fmt;

use crate::error::{Result, RotaError};
use crate::huffman::tree::{CodeMap, HuffmanNode, HuffmanTree};

/// Assign each leaf the path from the root: `'0'` for left, `'1'` for right.
///
/// A tree that is a single leaf gets the code `"0"`, never the empty string.
pub fn generate_codes<S: Ord + Clone>(tree: &HuffmanTree<S>) -> CodeMap<S> {
    let mut codes = CodeMap::new();
    let mut prefix = String::new();
    collect_codes(tree.root(), &mut prefix, &mut codes);
    tracing::debug!(symbols = codes.len(), "code map generated");
    codes
}

fn collect_codes<S: Ord + Clone>(
    node: &HuffmanNode<S>,
    prefix: &mut String,
    codes: &mut CodeMap<S>,
) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix.clone()
            };
            codes.insert(symbol.clone(), code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            for (bit, child) in [('0', left), ('1', right)] {
                if let Some(child) = child {
                    prefix.push(bit);
                    collect_codes(child, prefix, codes);
                    prefix.pop();
                }
            }
        }
    }
}

/// Concatenate the code of each symbol. Symbols without a code are skipped.
pub fn encode<S: Ord>(sequence: impl IntoIterator<Item = S>, codes: &CodeMap<S>) -> String {
    let mut bits = String::new();
    let mut skipped = 0usize;
    for symbol in sequence {
        match codes.get(&symbol) {
            Some(code) => bits.push_str(code),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "symbols without a code were dropped");
    }
    bits
}

/// Like [`encode`], but a symbol without a code is an `UnknownSymbol` error.
pub fn encode_strict<S: Ord + fmt::Display>(
    sequence: impl IntoIterator<Item = S>,
    codes: &CodeMap<S>,
) -> Result<String> {
    let mut bits = String::new();
    for symbol in sequence {
        let code = codes.get(&symbol).ok_or_else(|| RotaError::UnknownSymbol {
            symbol: symbol.to_string(),
        })?;
        bits.push_str(code);
    }
    Ok(bits)
}

/// Walk the tree from the root for each bit, emitting a symbol at every leaf.
///
/// Characters other than `'0'` and `'1'` are skipped. A single-leaf tree decodes every
/// bit as its one symbol. A bit with no branch to follow is a `DecodeMismatch`. Bits left
/// over after the last complete code are dropped. No tree or no bits decode to nothing.
pub fn decode<S: Clone>(bits: &str, tree: Option<&HuffmanTree<S>>) -> Result<Vec<S>> {
    let Some(tree) = tree else {
        return Ok(Vec::new());
    };
    let root = tree.root();

    if let HuffmanNode::Leaf { symbol, .. } = root {
        let count = bits.chars().filter(|&c| c == '0' || c == '1').count();
        return Ok(vec![symbol.clone(); count]);
    }

    let mut symbols = Vec::new();
    let mut current = root;

    for (index, bit) in bits.chars().enumerate() {
        if bit != '0' && bit != '1' {
            continue;
        }

        current = current.child(bit).ok_or_else(|| {
            RotaError::decode_mismatch(index, format!("no branch for bit {}", bit))
        })?;

        if let HuffmanNode::Leaf { symbol, .. } = current {
            symbols.push(symbol.clone());
            current = root;
        }
    }

    if !std::ptr::eq(current, root) {
        tracing::debug!("trailing bits do not complete a code");
    }

    tracing::trace!(symbols = symbols.len(), "decoded");
    Ok(symbols)
}
