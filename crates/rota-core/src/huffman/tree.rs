//! Frequency table and prefix-code tree construction

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use crate::error::{Result, RotaError};

/// Occurrence count per distinct symbol
pub type FrequencyTable<S> = BTreeMap<S, u64>;

/// Bit string (`'0'`/`'1'` characters) per symbol
pub type CodeMap<S> = BTreeMap<S, String>;

/// Node of a prefix-code tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf {
        symbol: S,
        frequency: u64,
    },
    /// Trees from [`build_tree`] always have both children; trees rebuilt from a
    /// code map may not.
    Internal {
        frequency: u64,
        left: Option<Box<HuffmanNode<S>>>,
        right: Option<Box<HuffmanNode<S>>>,
    },
}

impl<S> HuffmanNode<S> {
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { frequency, .. } | HuffmanNode::Internal { frequency, .. } => {
                *frequency
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Child reached by `bit` (`'0'` left, `'1'` right)
    pub fn child(&self, bit: char) -> Option<&HuffmanNode<S>> {
        match (self, bit) {
            (HuffmanNode::Internal { left, .. }, '0') => left.as_deref(),
            (HuffmanNode::Internal { right, .. }, '1') => right.as_deref(),
            _ => None,
        }
    }

    fn empty_internal() -> Self {
        HuffmanNode::Internal {
            frequency: 0,
            left: None,
            right: None,
        }
    }
}

/// Immutable prefix-code tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Total symbol count the tree was built from (0 for trees rebuilt from codes)
    pub fn frequency(&self) -> u64 {
        self.root.frequency()
    }
}

impl<S: Ord + Clone> HuffmanTree<S> {
    /// Rebuild a decoding tree from a persisted code map.
    ///
    /// Returns `None` for an empty map. A map holding one symbol coded `"0"` gives the
    /// single-leaf tree that [`build_tree`] produces for one distinct symbol. Codes must
    /// be non-empty `0`/`1` strings and no code may be a prefix of another.
    pub fn from_codes(codes: &CodeMap<S>) -> Result<Option<Self>> {
        if codes.is_empty() {
            return Ok(None);
        }

        if codes.len() == 1 {
            if let Some((symbol, code)) = codes.iter().next() {
                if code == "0" {
                    return Ok(Some(HuffmanTree {
                        root: HuffmanNode::Leaf {
                            symbol: symbol.clone(),
                            frequency: 0,
                        },
                    }));
                }
            }
        }

        let mut root = HuffmanNode::empty_internal();
        for (symbol, code) in codes {
            if code.is_empty() || !code.chars().all(|c| c == '0' || c == '1') {
                return Err(RotaError::invalid_value("huffman code", format!("{:?}", code)));
            }
            insert_code(&mut root, code, symbol)?;
        }

        Ok(Some(HuffmanTree { root }))
    }
}

fn prefix_conflict(code: &str) -> RotaError {
    RotaError::invalid_value("huffman code", format!("{} conflicts with another code", code))
}

fn insert_code<S: Clone>(root: &mut HuffmanNode<S>, code: &str, symbol: &S) -> Result<()> {
    let mut node = root;
    let last = code.len() - 1;

    for (i, bit) in code.chars().enumerate() {
        let slot = match node {
            HuffmanNode::Internal { left, right, .. } => {
                if bit == '0' {
                    left
                } else {
                    right
                }
            }
            HuffmanNode::Leaf { .. } => return Err(prefix_conflict(code)),
        };

        if i == last {
            if slot.is_some() {
                return Err(prefix_conflict(code));
            }
            *slot = Some(Box::new(HuffmanNode::Leaf {
                symbol: symbol.clone(),
                frequency: 0,
            }));
            return Ok(());
        }

        node = slot
            .get_or_insert_with(|| Box::new(HuffmanNode::empty_internal()))
            .as_mut();
    }

    Ok(())
}

/// Count occurrences of each distinct symbol. Empty input gives an empty table.
pub fn build_frequency_table<S: Ord>(sequence: impl IntoIterator<Item = S>) -> FrequencyTable<S> {
    let mut table = FrequencyTable::new();
    for symbol in sequence {
        *table.entry(symbol).or_insert(0) += 1;
    }
    table
}

/// Priority queue entry, ordered by frequency then arrival
struct QueueEntry<S> {
    frequency: u64,
    sequence: u64,
    node: HuffmanNode<S>,
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for QueueEntry<S> {}

impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Build the prefix-code tree for a frequency table.
///
/// Leaves enter the queue in table order, which is symbol order since the table is a
/// `BTreeMap`; "arrival" below means that order, not first occurrence in the input.
/// The two lowest-frequency nodes are merged repeatedly (first popped on the left);
/// ties go to whichever node arrived first, merged nodes arriving after everything
/// already queued. An empty table has no tree.
pub fn build_tree<S: Clone>(table: &FrequencyTable<S>) -> Option<HuffmanTree<S>> {
    let mut queue: BinaryHeap<Reverse<QueueEntry<S>>> = BinaryHeap::new();
    let mut next_sequence = 0u64;

    for (symbol, &frequency) in table {
        queue.push(Reverse(QueueEntry {
            frequency,
            sequence: next_sequence,
            node: HuffmanNode::Leaf {
                symbol: symbol.clone(),
                frequency,
            },
        }));
        next_sequence += 1;
    }

    loop {
        let Reverse(first) = queue.pop()?;
        let Some(Reverse(second)) = queue.pop() else {
            return Some(HuffmanTree { root: first.node });
        };

        let frequency = first.frequency + second.frequency;
        queue.push(Reverse(QueueEntry {
            frequency,
            sequence: next_sequence,
            node: HuffmanNode::Internal {
                frequency,
                left: Some(Box::new(first.node)),
                right: Some(Box::new(second.node)),
            },
        }));
        next_sequence += 1;
    }
}
