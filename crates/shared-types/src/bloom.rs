//! # Logs Bloom
//!
//! 2048-bit bloom summarizing the addresses and topics of a receipt's logs.
//!
//! Each input sets three bits. The bit indices are taken from the first
//! three big-endian 16-bit words of `keccak256(input)`, masked to 11 bits.

use crate::entities::Log;
use crate::hashing::keccak256;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

/// Size of a bloom in bytes.
pub const BLOOM_BYTES: usize = 256;

/// Logs bloom filter.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bloom(#[serde_as(as = "Bytes")] pub [u8; BLOOM_BYTES]);

impl Default for Bloom {
    fn default() -> Self {
        Self([0u8; BLOOM_BYTES])
    }
}

impl Bloom {
    /// Empty bloom.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLOOM_BYTES] {
        &self.0
    }

    /// Returns true if no bit is set.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Set the three bits for `input`.
    pub fn accrue(&mut self, input: &[u8]) {
        for (byte, mask) in bloom_positions(input) {
            self.0[byte] |= mask;
        }
    }

    /// OR another bloom into this one.
    pub fn accrue_bloom(&mut self, other: &Bloom) {
        for (dst, src) in self.0.iter_mut().zip(other.0.iter()) {
            *dst |= *src;
        }
    }

    /// Probabilistic membership test. Never returns a false negative.
    pub fn contains_input(&self, input: &[u8]) -> bool {
        bloom_positions(input)
            .iter()
            .all(|(byte, mask)| self.0[*byte] & mask == *mask)
    }

    /// Build the bloom of a log list (address and every topic of each log).
    pub fn from_logs(logs: &[Log]) -> Self {
        let mut bloom = Self::zero();
        for log in logs {
            bloom.accrue(log.address.as_bytes());
            for topic in &log.topics {
                bloom.accrue(topic.as_bytes());
            }
        }
        bloom
    }
}

fn bloom_positions(input: &[u8]) -> [(usize, u8); 3] {
    let hash = keccak256(input);
    let h = hash.as_bytes();
    let mut positions = [(0usize, 0u8); 3];
    for (slot, i) in [0usize, 2, 4].into_iter().enumerate() {
        let bit = ((usize::from(h[i]) << 8) | usize::from(h[i + 1])) & 2047;
        positions[slot] = (BLOOM_BYTES - 1 - bit / 8, 1u8 << (bit % 8));
    }
    positions
}

impl fmt::LowerHex for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bloom({:#x})", self)
    }
}
