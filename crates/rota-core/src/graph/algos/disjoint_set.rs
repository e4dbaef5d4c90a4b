//! Disjoint-set (union-find) over vertex labels.
//!
//! Labels are mapped to dense indices at construction. `find` compresses the whole
//! path it walks; `union` attaches the lower-rank root beneath the higher-rank one.
//! On equal rank the second argument's root goes beneath the first's, so the
//! representative after any sequence of unions is fixed by the call order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Result, RotaError};

#[derive(Debug, Clone)]
pub struct DisjointSet {
    index: HashMap<String, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// One singleton set per label. Duplicate labels share a set.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = HashMap::new();
        for label in labels {
            let next = index.len();
            index.entry(label.to_string()).or_insert(next);
        }
        let n = index.len();
        Self {
            index,
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn slot(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| RotaError::unknown_vertex(label))
    }

    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Representative index of the set containing `label`.
    pub fn find(&mut self, label: &str) -> Result<usize> {
        let slot = self.slot(label)?;
        Ok(self.find_root(slot))
    }

    /// Merge the sets of `a` and `b`. Returns false when they were already joined.
    pub fn union(&mut self, a: &str, b: &str) -> Result<bool> {
        let ra = self.find(a)?;
        let rb = self.find(b)?;

        if ra == rb {
            return Ok(false);
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => {
                self.parent[ra] = rb;
            }
            Ordering::Greater => {
                self.parent[rb] = ra;
            }
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        Ok(true)
    }

    pub fn connected(&mut self, a: &str, b: &str) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}
