//! Keccak hashing adapter
//!
//! Implements the ChainHasher port with a binary Keccak-256 Merkle tree.

use crate::ports::ChainHasher;
use shared_types::hashing::keccak256_concat;
use shared_types::{keccak256, Bloom, Receipt, EMPTY_LIST_HASH, H256};

/// Padding leaf for incomplete trees.
const SENTINEL_HASH: H256 = H256::zero();

/// Binary Merkle tree over Keccak-256.
///
/// Leaves are `keccak256(item)`, padded with zero hashes to a power of two
/// (at least two). Each parent is `keccak256(left || right)`. The empty
/// sequence hashes to [`EMPTY_LIST_HASH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeccakHasher;

impl KeccakHasher {
    pub fn new() -> Self {
        Self
    }
}

impl ChainHasher for KeccakHasher {
    fn merkle_root(&self, leaves: &[Vec<u8>]) -> H256 {
        if leaves.is_empty() {
            return EMPTY_LIST_HASH;
        }

        let padded = leaves.len().next_power_of_two().max(2);
        let mut level: Vec<H256> = leaves.iter().map(|leaf| keccak256(leaf)).collect();
        level.resize(padded, SENTINEL_HASH);

        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| keccak256_concat(&[pair[0].as_bytes(), pair[1].as_bytes()]))
                .collect();
        }
        level[0]
    }

    fn create_bloom(&self, receipts: &[Receipt]) -> Bloom {
        let mut bloom = Bloom::zero();
        for receipt in receipts {
            bloom.accrue_bloom(&receipt.bloom);
        }
        bloom
    }
}
