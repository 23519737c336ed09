//! Chain validation error types.

use thiserror::Error;

/// Errors that can occur while building a chain from raw descriptors.
///
/// These are structural errors at the input boundary: the descriptors read
/// from storage do not describe a valid chain. Once a chain exists, its
/// invariants hold for every sub-chain derived from it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A chain must contain at least one step.
    #[error("Chain must contain at least one step")]
    Empty,

    /// Adjacent steps disagree about the size of the value flowing
    /// between them.
    #[error(
        "Size mismatch after step {position}: output {output_size} != next input {input_size}"
    )]
    SizeMismatch {
        /// Position of the earlier step in the descriptor list.
        position: usize,
        /// Output size declared by the earlier step.
        output_size: u64,
        /// Input size declared by the later step.
        input_size: u64,
    },
}
