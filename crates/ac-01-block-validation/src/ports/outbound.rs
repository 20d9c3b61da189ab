//! Driven ports (outbound dependencies)

use crate::domain::StateRootVariant;
use shared_types::{Bloom, Receipt, H256};

/// Pure hashing collaborator
pub trait ChainHasher: Send + Sync {
    /// Root over an ordered sequence of encoded items.
    fn merkle_root(&self, leaves: &[Vec<u8>]) -> H256;

    /// Block bloom derived from receipts.
    fn create_bloom(&self, receipts: &[Receipt]) -> Bloom;
}

/// Post-execution state snapshot, owned by the executor
pub trait PostState: Send + Sync {
    /// State root after the block's transactions under `variant`.
    fn intermediate_root(&self, variant: StateRootVariant) -> H256;
}
