//! # Error Types
//!
//! Errors surfaced by collaborators consumed through the shared ports.

use primitive_types::H256;
use thiserror::Error;

/// Errors returned by a [`crate::ConsensusEngine`] when verifying uncles.
///
/// Propagated unchanged through block-body validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// More uncles than the engine allows per block.
    #[error("Too many uncles: {count} exceeds maximum {max}")]
    TooManyUncles { count: usize, max: usize },

    /// The same uncle appears twice (or was already included by an ancestor).
    #[error("Duplicate uncle: {0:?}")]
    DuplicateUncle(H256),

    /// The uncle is a direct ancestor of the block.
    #[error("Uncle is ancestor: {0:?}")]
    UncleIsAncestor(H256),

    /// The uncle's parent is not a known ancestor within range.
    #[error("Dangling uncle: {0:?}")]
    DanglingUncle(H256),

    /// The uncle's number is outside the allowed generation window.
    #[error("Invalid uncle number: uncle {uncle} for block {block}")]
    InvalidUncleNumber { uncle: u64, block: u64 },

    /// Engine-specific failure.
    #[error("Engine error: {0}")]
    Other(String),
}
