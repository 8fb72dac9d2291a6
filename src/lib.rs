//! hufftext: a trainable Huffman codec for text.
//!
//! Learns a symbol-frequency model from sample text, builds a binary
//! prefix-code tree from the model, and uses the tree to losslessly
//! convert text to a bit sequence and back. Encoded output is terminated
//! by a reserved end marker rather than a length field, so bit sequences
//! survive zero-padding to byte boundaries.
//!
//! ```
//! use hufftext::TextCodec;
//!
//! let mut codec = TextCodec::default();
//! codec.train("the quick brown fox jumps over the lazy dog");
//! codec.ensure_minimum_coverage();
//! codec.build_tree().unwrap();
//!
//! let bits = codec.encode("hello world").unwrap();
//! assert_eq!(codec.decode(&bits).unwrap(), "hello world");
//! ```

pub mod bits;
pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod tree;

use std::sync::Arc;

pub use crate::bits::BitSeq;
pub use crate::codes::CodeTable;
pub use crate::config::CodecConfig;
pub use crate::error::CodecError;
pub use crate::model::SymbolModel;
pub use crate::tree::{HuffmanNode, HuffmanTree, LeafPath};

/// The codec engine: owns the trainable model and the currently-built
/// tree and code table.
///
/// Training and `build_tree` are exclusive-writer operations; a built
/// tree is immutable and shared behind an `Arc`, so callers that rebuild
/// while readers are in flight can clone the handle from [`TextCodec::tree`]
/// first and keep decoding against the old version.
pub struct TextCodec {
    config: CodecConfig,
    model: SymbolModel,
    tree: Option<Arc<HuffmanTree>>,
    table: Option<CodeTable>,
}

impl TextCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            model: SymbolModel::new(),
            tree: None,
            table: None,
        }
    }

    /// Feeds one unit of sample text into the model.
    pub fn train(&mut self, text: &str) {
        self.model.train(text);
    }

    /// Applies the configured baseline alphabet and floor to the model,
    /// so any text over that alphabet stays encodable after the next
    /// build.
    pub fn ensure_minimum_coverage(&mut self) {
        self.model.ensure_minimum_coverage(
            self.config.baseline_alphabet.chars(),
            self.config.coverage_floor,
        );
    }

    /// Builds a fresh tree from the current model and re-derives the
    /// code table, replacing any previous pair. Bit sequences encoded
    /// under the old tree are only decodable through `Arc` handles taken
    /// before the rebuild.
    pub fn build_tree(&mut self) -> Result<(), CodecError> {
        let tree = HuffmanTree::build(&self.model)?;
        let table = CodeTable::derive(&tree);
        self.tree = Some(Arc::new(tree));
        self.table = Some(table);
        Ok(())
    }

    pub fn encode(&self, text: &str) -> Result<BitSeq, CodecError> {
        let table = self.table.as_ref().ok_or(CodecError::UninitializedTree)?;
        table.encode(text)
    }

    pub fn decode(&self, bits: &BitSeq) -> Result<String, CodecError> {
        let tree = self.tree.as_ref().ok_or(CodecError::UninitializedTree)?;
        tree.decode(bits)
    }

    /// Read-only view of the current model's frequencies, for diagnostic
    /// consumers.
    pub fn frequencies(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.model.frequencies()
    }

    pub fn end_events(&self) -> u64 {
        self.model.end_events()
    }

    pub fn model(&self) -> &SymbolModel {
        &self.model
    }

    /// Handle to the currently-built tree, for path enumeration and for
    /// snapshotting across rebuilds.
    pub fn tree(&self) -> Result<&Arc<HuffmanTree>, CodecError> {
        self.tree.as_ref().ok_or(CodecError::UninitializedTree)
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}
