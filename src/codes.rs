//! Code-table derivation and the encoder.

use std::collections::HashMap;

use tracing::debug;

use crate::bits::BitSeq;
use crate::error::CodecError;
use crate::tree::{HuffmanNode, HuffmanTree};

/// Direct symbol-to-bit-path lookup flattened out of a built tree.
/// Pure function of the tree; invalidated by a rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, BitSeq>,
    end_code: BitSeq,
}

impl CodeTable {
    pub fn derive(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        table.visit(tree.root(), BitSeq::new());
        debug!(symbols = table.codes.len(), "derived code table");
        table
    }

    fn visit(&mut self, node: &HuffmanNode, prefix: BitSeq) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                self.codes.insert(*symbol, prefix);
            }
            HuffmanNode::End { .. } => {
                self.end_code = prefix;
            }
            HuffmanNode::Branch { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(false);
                self.visit(left, left_prefix);
                let mut right_prefix = prefix;
                right_prefix.push(true);
                self.visit(right, right_prefix);
            }
        }
    }

    pub fn get(&self, symbol: char) -> Option<&BitSeq> {
        self.codes.get(&symbol)
    }

    /// Code of the end marker. Empty only on the degenerate single-node
    /// tree, where the root itself is the end leaf.
    pub fn end_code(&self) -> &BitSeq {
        &self.end_code
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Encodes `text` and terminates it with the end marker's code.
    /// All-or-nothing: the first symbol without a table entry aborts the
    /// call and no bits are returned.
    pub fn encode(&self, text: &str) -> Result<BitSeq, CodecError> {
        let mut out = BitSeq::new();
        for symbol in text.chars() {
            let code = self
                .get(symbol)
                .ok_or(CodecError::UnmappedSymbol(symbol))?;
            out.extend(code.iter());
        }
        out.extend(self.end_code.iter());
        Ok(out)
    }
}
