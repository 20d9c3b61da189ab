//! # Core Domain Entities
//!
//! Chain entities consumed by validation and sealing.
//!
//! ## Clusters
//!
//! - **Chain**: `Header`, `Block`, `Transaction`
//! - **Execution output**: `Receipt`, `Log`
//!
//! Every entity that contributes to a root has a canonical RLP encoding
//! (`rlp::Encodable`). Identity hashes are Keccak-256 of that encoding.

use crate::bloom::Bloom;
use crate::hashing::keccak256;
use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Serialize};

// Re-export the fixed-width primitives used across all subsystems
pub use primitive_types::{H160, H256, U256};

/// A 20-byte account address.
pub type Address = H160;

/// Number of RLP fields in a sealed header.
const HEADER_FIELDS: usize = 15;

/// Number of RLP fields in a header without the PoW seal (mix digest, nonce).
const SEAL_FIELDS: usize = HEADER_FIELDS - 2;

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// The header of a block.
///
/// Immutable once produced; identity is [`Header::hash`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Header {
    /// Hash of the parent block.
    pub parent_hash: H256,
    /// Root of the uncle header sequence.
    pub uncle_hash: H256,
    /// Beneficiary of the block reward (the miner).
    pub coinbase: Address,
    /// State root after applying the block.
    pub state_root: H256,
    /// Root of the transaction sequence.
    pub transactions_root: H256,
    /// Root of the receipt sequence.
    pub receipts_root: H256,
    /// Union of all receipt blooms.
    pub logs_bloom: Bloom,
    /// Proof-of-work difficulty.
    pub difficulty: U256,
    /// Block number.
    pub number: u64,
    /// Gas ceiling for this block.
    pub gas_limit: u64,
    /// Gas consumed by all transactions.
    pub gas_used: u64,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Arbitrary producer data.
    pub extra_data: Vec<u8>,
    /// PoW mix digest.
    pub mix_digest: H256,
    /// PoW nonce.
    pub nonce: u64,
}

impl Header {
    /// Identity hash: Keccak-256 of the full RLP encoding.
    pub fn hash(&self) -> H256 {
        keccak256(&rlp::encode(self))
    }

    /// Hash of the header without its PoW seal.
    ///
    /// This is the `pow-hash` handed to solvers; it stays fixed while the
    /// nonce is searched.
    pub fn seal_hash(&self) -> H256 {
        let mut stream = RlpStream::new_list(SEAL_FIELDS);
        self.append_unsealed(&mut stream);
        keccak256(&stream.out())
    }

    /// Check if this is a genesis header.
    pub fn is_genesis(&self) -> bool {
        self.number == 0 && self.parent_hash.is_zero()
    }

    fn append_unsealed(&self, s: &mut RlpStream) {
        s.append(&self.parent_hash);
        s.append(&self.uncle_hash);
        s.append(&self.coinbase);
        s.append(&self.state_root);
        s.append(&self.transactions_root);
        s.append(&self.receipts_root);
        s.append(&self.logs_bloom.as_bytes().to_vec());
        s.append(&self.difficulty);
        s.append(&self.number);
        s.append(&self.gas_limit);
        s.append(&self.gas_used);
        s.append(&self.timestamp);
        s.append(&self.extra_data);
    }
}

impl Encodable for Header {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(HEADER_FIELDS);
        self.append_unsealed(s);
        s.append(&self.mix_digest);
        s.append(&self.nonce.to_be_bytes().to_vec());
    }
}

/// A signed transaction as carried in a block body.
///
/// Execution semantics are out of scope here; only the encoding matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Transaction {
    /// Sender's nonce.
    pub nonce: u64,
    /// Gas price in base units.
    pub gas_price: U256,
    /// Gas limit for this transaction.
    pub gas_limit: u64,
    /// Recipient (None for contract creation).
    pub to: Option<Address>,
    /// Value transferred.
    pub value: U256,
    /// Call data or init code.
    pub data: Vec<u8>,
    /// Signature recovery id.
    pub v: u64,
    /// Signature r.
    pub r: U256,
    /// Signature s.
    pub s: U256,
}

impl Transaction {
    /// Transaction hash.
    pub fn hash(&self) -> H256 {
        keccak256(&rlp::encode(self))
    }
}

impl Encodable for Transaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(9);
        s.append(&self.nonce);
        s.append(&self.gas_price);
        s.append(&self.gas_limit);
        match &self.to {
            Some(to) => s.append(to),
            None => s.append_empty_data(),
        };
        s.append(&self.value);
        s.append(&self.data);
        s.append(&self.v);
        s.append(&self.r);
        s.append(&self.s);
    }
}

/// A full block: header plus ordered body.
///
/// Borrowed read-only by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
    pub uncles: Vec<Header>,
}

impl Block {
    /// Assemble a block from its parts.
    pub fn new(header: Header, transactions: Vec<Transaction>, uncles: Vec<Header>) -> Self {
        Self {
            header,
            transactions,
            uncles,
        }
    }

    /// Block hash (the header hash).
    pub fn hash(&self) -> H256 {
        self.header.hash()
    }

    /// Block number.
    pub fn number(&self) -> u64 {
        self.header.number
    }

    /// Parent hash.
    pub fn parent_hash(&self) -> H256 {
        self.header.parent_hash
    }

    /// Declared gas used.
    pub fn gas_used(&self) -> u64 {
        self.header.gas_used
    }

    /// Declared gas limit.
    pub fn gas_limit(&self) -> u64 {
        self.header.gas_limit
    }

    /// Replace the header, keeping the body.
    pub fn with_seal(mut self, header: Header) -> Self {
        self.header = header;
        self
    }
}

// =============================================================================
// CLUSTER B: EXECUTION OUTPUT
// =============================================================================

/// A log entry emitted during execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Log {
    /// Emitting contract.
    pub address: Address,
    /// Indexed topics.
    pub topics: Vec<H256>,
    /// Unindexed payload.
    pub data: Vec<u8>,
}

impl Encodable for Log {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3);
        s.append(&self.address);
        s.begin_list(self.topics.len());
        for topic in &self.topics {
            s.append(topic);
        }
        s.append(&self.data);
    }
}

/// Outcome of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    Failed,
    Successful,
}

impl ReceiptStatus {
    fn as_u64(self) -> u64 {
        match self {
            ReceiptStatus::Failed => 0,
            ReceiptStatus::Successful => 1,
        }
    }
}

/// Execution receipt, one per transaction.
///
/// Produced by the external executor; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub status: ReceiptStatus,
    /// Gas used by the block up to and including this transaction.
    pub cumulative_gas_used: u64,
    /// Gas used by this transaction alone (not part of the consensus encoding).
    pub gas_used: u64,
    pub logs: Vec<Log>,
    /// Bloom over this receipt's logs.
    pub bloom: Bloom,
}

impl Receipt {
    /// Build a receipt and derive its bloom from the logs.
    pub fn new(status: ReceiptStatus, cumulative_gas_used: u64, gas_used: u64, logs: Vec<Log>) -> Self {
        let bloom = Bloom::from_logs(&logs);
        Self {
            status,
            cumulative_gas_used,
            gas_used,
            logs,
            bloom,
        }
    }
}

impl Encodable for Receipt {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(4);
        s.append(&self.status.as_u64());
        s.append(&self.cumulative_gas_used);
        s.append(&self.bloom.as_bytes().to_vec());
        s.begin_list(self.logs.len());
        for log in &self.logs {
            s.append(log);
        }
    }
}
