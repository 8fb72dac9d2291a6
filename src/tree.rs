//! Prefix-code tree: construction, decoding, and path enumeration.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::bits::BitSeq;
use crate::error::CodecError;
use crate::model::SymbolModel;

/// One node of a built tree. The end marker is its own variant, not a
/// symbol value, so matches over a tree are exhaustive and no "bad node"
/// state exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: u64,
    },
    End {
        weight: u64,
    },
    Branch {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. }
            | HuffmanNode::End { weight }
            | HuffmanNode::Branch { weight, .. } => *weight,
        }
    }
}

/// Queue entry whose insertion sequence breaks weight ties: seeded
/// leaves pop before any synthesized branch, earlier branches before
/// later ones. That makes every build of the same model produce the
/// same tree.
struct QueueEntry {
    weight: u64,
    seq: u64,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; comparing the other way around makes
        // it pop the lowest (weight, seq) first.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// One root-to-leaf path; `symbol` is `None` for the end-marker leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafPath {
    pub symbol: Option<char>,
    pub weight: u64,
    pub bits: BitSeq,
}

/// An immutable prefix-code tree built from a model snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Greedy weighted merge: repeatedly combine the two lightest nodes
    /// until one remains. Leaves are seeded in ascending symbol order
    /// with the end leaf last; each merge attaches the first-popped node
    /// on the 0 edge and the second on the 1 edge.
    pub fn build(model: &SymbolModel) -> Result<Self, CodecError> {
        if model.is_empty() {
            return Err(CodecError::EmptyModel);
        }

        let mut symbols: Vec<(char, u64)> =
            model.frequencies().filter(|&(_, count)| count > 0).collect();
        symbols.sort_unstable_by_key(|&(symbol, _)| symbol);
        let distinct = symbols.len();

        let mut heap = BinaryHeap::with_capacity(distinct + 1);
        let mut seq = 0u64;
        for (symbol, weight) in symbols {
            heap.push(QueueEntry {
                weight,
                seq,
                node: HuffmanNode::Leaf { symbol, weight },
            });
            seq += 1;
        }

        // The end leaf is seeded even with zero recorded end events
        // (a coverage-only model), so every built tree can terminate a
        // stream.
        let end_weight = model.end_events();
        heap.push(QueueEntry {
            weight: end_weight,
            seq,
            node: HuffmanNode::End { weight: end_weight },
        });
        seq += 1;

        while heap.len() > 1 {
            let first = heap.pop().expect("heap holds at least two nodes");
            let second = heap.pop().expect("heap holds at least two nodes");
            let weight = first.weight + second.weight;
            heap.push(QueueEntry {
                weight,
                seq,
                node: HuffmanNode::Branch {
                    weight,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        }

        let root = heap.pop().expect("heap holds the root").node;
        debug!(distinct, total_weight = root.weight(), "built prefix-code tree");
        Ok(Self { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Walks the tree bit by bit, emitting a symbol at each ordinary
    /// leaf and stopping at the end leaf. Bits past the end marker are
    /// ignored; running out of bits mid-walk is an error.
    pub fn decode(&self, bits: &BitSeq) -> Result<String, CodecError> {
        let mut bits = bits.iter();
        let mut out = String::new();
        let mut node = &self.root;
        loop {
            match node {
                HuffmanNode::Branch { left, right, .. } => match bits.next() {
                    Some(false) => node = left,
                    Some(true) => node = right,
                    None => return Err(CodecError::TruncatedData),
                },
                HuffmanNode::Leaf { symbol, .. } => {
                    out.push(*symbol);
                    node = &self.root;
                }
                HuffmanNode::End { .. } => return Ok(out),
            }
        }
    }

    /// Enumerates every root-to-leaf path, for diagnostic consumers that
    /// render the tree.
    pub fn paths(&self) -> Vec<LeafPath> {
        let mut out = Vec::new();
        collect_paths(&self.root, BitSeq::new(), &mut out);
        out
    }
}

fn collect_paths(node: &HuffmanNode, prefix: BitSeq, out: &mut Vec<LeafPath>) {
    match node {
        HuffmanNode::Leaf { symbol, weight } => out.push(LeafPath {
            symbol: Some(*symbol),
            weight: *weight,
            bits: prefix,
        }),
        HuffmanNode::End { weight } => out.push(LeafPath {
            symbol: None,
            weight: *weight,
            bits: prefix,
        }),
        HuffmanNode::Branch { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            collect_paths(left, left_prefix, out);
            let mut right_prefix = prefix;
            right_prefix.push(true);
            collect_paths(right, right_prefix, out);
        }
    }
}
