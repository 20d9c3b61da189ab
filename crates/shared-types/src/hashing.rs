//! # Hashing Helpers
//!
//! Keccak-256 is the only digest used for entity identity, roots and blooms.

use primitive_types::H256;
use sha3::{Digest, Keccak256};

/// Keccak-256 of the RLP encoding of an empty string (`0x80`).
///
/// This is the root of an empty sequence.
pub const EMPTY_LIST_HASH: H256 = H256([
    0x56, 0xe8, 0x1f, 0x17, 0x1b, 0xcc, 0x55, 0xa6, 0xff, 0x83, 0x45, 0xe6, 0x92, 0xc0, 0xf8,
    0x6e, 0x5b, 0x48, 0xe0, 0x1b, 0x99, 0x6c, 0xad, 0xc0, 0x01, 0x62, 0x2f, 0xb5, 0xe3, 0x63,
    0xb4, 0x21,
]);

/// Hash arbitrary bytes with Keccak-256.
pub fn keccak256(data: &[u8]) -> H256 {
    H256::from_slice(&Keccak256::digest(data))
}

/// Hash the concatenation of several inputs with Keccak-256.
pub fn keccak256_concat(inputs: &[&[u8]]) -> H256 {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    H256::from_slice(&hasher.finalize())
}
