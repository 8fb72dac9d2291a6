//! Error types for hufftext

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("cannot build a tree from a model with no trained weight")]
    EmptyModel,

    #[error("symbol {0:?} has no code in the current tree")]
    UnmappedSymbol(char),

    #[error("bit sequence ended before the end marker was reached")]
    TruncatedData,

    #[error("no tree has been built yet")]
    UninitializedTree,
}
