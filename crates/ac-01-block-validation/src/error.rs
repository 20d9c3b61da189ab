//! Error types for block validation

use shared_types::{Bloom, EngineError, H256};
use thiserror::Error;

/// Result type alias for validation operations
pub type ValidationResult<T> = std::result::Result<T, BlockValidationError>;

/// How a caller should react to a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The block was already processed. Not a fault, skip it.
    Informational,
    /// A header field disagrees with the block contents. Reject the block.
    StructuralMismatch,
    /// An ancestor is missing or pruned. Fetch or regenerate, then retry.
    MissingDependency,
    /// The consensus engine rejected the block.
    EngineDelegated,
}

/// Errors returned by `validate_body` and `validate_state`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockValidationError {
    #[error("Block already known: #{number} {hash:?}")]
    KnownBlock { number: u64, hash: H256 },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Uncle root hash mismatch: have {have:?}, want {want:?}")]
    UncleRootMismatch { have: H256, want: H256 },

    #[error("Transaction root hash mismatch: have {have:?}, want {want:?}")]
    TxRootMismatch { have: H256, want: H256 },

    #[error("Unknown ancestor {parent:?} of block #{number}")]
    UnknownAncestor { parent: H256, number: u64 },

    #[error("Pruned ancestor {parent:?} of block #{number}")]
    PrunedAncestor { parent: H256, number: u64 },

    #[error("Invalid gas used (remote: {remote} local: {local})")]
    GasUsedMismatch { remote: u64, local: u64 },

    #[error("Invalid bloom (remote: {remote:?} local: {local:?})")]
    BloomMismatch { remote: Box<Bloom>, local: Box<Bloom> },

    #[error("Invalid receipt root hash (remote: {remote:?} local: {local:?})")]
    ReceiptRootMismatch { remote: H256, local: H256 },

    #[error("Invalid state root (remote: {remote:?} local: {local:?})")]
    StateRootMismatch { remote: H256, local: H256 },
}

impl BlockValidationError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::KnownBlock { .. } => ErrorClass::Informational,
            Self::Engine(_) => ErrorClass::EngineDelegated,
            Self::UnknownAncestor { .. } | Self::PrunedAncestor { .. } => {
                ErrorClass::MissingDependency
            }
            Self::UncleRootMismatch { .. }
            | Self::TxRootMismatch { .. }
            | Self::GasUsedMismatch { .. }
            | Self::BloomMismatch { .. }
            | Self::ReceiptRootMismatch { .. }
            | Self::StateRootMismatch { .. } => ErrorClass::StructuralMismatch,
        }
    }

    /// Missing-dependency errors clear once the caller supplies the ancestor.
    pub fn is_recoverable(&self) -> bool {
        self.class() == ErrorClass::MissingDependency
    }

    /// The block is invalid and must never be accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.class(),
            ErrorClass::StructuralMismatch | ErrorClass::EngineDelegated
        )
    }

    /// Short label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::KnownBlock { .. } => "known_block",
            Self::Engine(_) => "engine",
            Self::UncleRootMismatch { .. } => "uncle_root",
            Self::TxRootMismatch { .. } => "tx_root",
            Self::UnknownAncestor { .. } => "unknown_ancestor",
            Self::PrunedAncestor { .. } => "pruned_ancestor",
            Self::GasUsedMismatch { .. } => "gas_used",
            Self::BloomMismatch { .. } => "bloom",
            Self::ReceiptRootMismatch { .. } => "receipt_root",
            Self::StateRootMismatch { .. } => "state_root",
        }
    }
}

/// Invalid validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Gas floor {floor} exceeds gas ceiling {ceiling}")]
    InvalidGasBounds { floor: u64, ceiling: u64 },

    #[error("Gas limit bound divisor must be non-zero")]
    ZeroBoundDivisor,
}
