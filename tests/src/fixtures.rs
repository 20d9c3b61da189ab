//! # Shared Fixtures
//!
//! Builders for blocks that commit correctly to their body and execution
//! output, and a node with the reference adapters wired in.

use ac_01_block_validation::{
    BlockValidator, BlockValidatorDependencies, ChainConfig, ChainHasher, InMemoryChain,
    KeccakHasher, KeccakPowEngine, PostState, StateRootVariant,
};
use rlp::Encodable;
use shared_types::{Block, Header, Log, Receipt, ReceiptStatus, Transaction, H160, H256, U256};
use std::sync::Arc;

/// Gas charged per transfer.
pub const TRANSFER_GAS: u64 = 21_000;

pub type TestValidator = BlockValidator<InMemoryChain, KeccakPowEngine, KeccakHasher>;

/// Post-state whose root is the same under every fork variant.
pub struct FixedState(pub H256);

impl PostState for FixedState {
    fn intermediate_root(&self, _variant: StateRootVariant) -> H256 {
        self.0
    }
}

/// Post-state whose root depends on whether empty accounts are deleted.
pub struct ForkedState {
    pub legacy: H256,
    pub delete_empty: H256,
}

impl PostState for ForkedState {
    fn intermediate_root(&self, variant: StateRootVariant) -> H256 {
        match variant {
            StateRootVariant::Legacy => self.legacy,
            StateRootVariant::DeleteEmptyObjects => self.delete_empty,
        }
    }
}

/// Chain view, engine and validator sharing one genesis.
pub struct TestNode {
    pub chain: Arc<InMemoryChain>,
    pub engine: Arc<KeccakPowEngine>,
    pub validator: TestValidator,
    pub genesis: Header,
}

impl TestNode {
    pub fn new(difficulty: u64) -> Self {
        Self::with_config(difficulty, ChainConfig::default())
    }

    pub fn with_config(difficulty: u64, config: ChainConfig) -> Self {
        let genesis = Header {
            gas_limit: 10_000_000,
            difficulty: U256::from(difficulty),
            ..Default::default()
        };
        let chain = Arc::new(InMemoryChain::with_genesis(genesis.clone()));
        let engine = Arc::new(KeccakPowEngine::new());
        let validator = BlockValidator::new(BlockValidatorDependencies {
            chain: Arc::clone(&chain),
            engine: Arc::clone(&engine),
            hasher: Arc::new(KeccakHasher::new()),
            config,
        });
        Self {
            chain,
            engine,
            validator,
            genesis,
        }
    }
}

pub fn encode_all<T: Encodable>(items: &[T]) -> Vec<Vec<u8>> {
    items.iter().map(|item| rlp::encode(item).to_vec()).collect()
}

pub fn transfer(nonce: u64, value: u64) -> Transaction {
    Transaction {
        nonce,
        gas_price: U256::from(1_000_000_000u64),
        gas_limit: TRANSFER_GAS,
        to: Some(H160::repeat_byte(0xbb)),
        value: U256::from(value),
        ..Default::default()
    }
}

/// One successful receipt per transaction, each with a single log.
pub fn receipts_for(transactions: &[Transaction]) -> Vec<Receipt> {
    transactions
        .iter()
        .enumerate()
        .map(|(i, tx)| {
            let log = Log {
                address: tx.to.unwrap_or_default(),
                topics: vec![H256::from_low_u64_be(tx.nonce)],
                data: tx.value.low_u64().to_be_bytes().to_vec(),
            };
            Receipt::new(
                ReceiptStatus::Successful,
                TRANSFER_GAS * (i as u64 + 1),
                TRANSFER_GAS,
                vec![log],
            )
        })
        .collect()
}

/// Builds unsealed blocks whose header commits to body and execution.
#[derive(Debug, Clone, Default)]
pub struct BlockBuilder {
    transactions: Vec<Transaction>,
    uncles: Vec<Header>,
    state_root: H256,
    tag: u8,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transfers(mut self, count: u64) -> Self {
        self.transactions = (0..count).map(|n| transfer(n, 1_000 + n)).collect();
        self
    }

    pub fn transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn uncles(mut self, uncles: Vec<Header>) -> Self {
        self.uncles = uncles;
        self
    }

    pub fn state_root(mut self, root: H256) -> Self {
        self.state_root = root;
        self
    }

    /// Distinguishes siblings built on the same parent.
    pub fn tag(mut self, tag: u8) -> Self {
        self.tag = tag;
        self
    }

    pub fn build_on(self, parent: &Header) -> (Block, Vec<Receipt>) {
        let hasher = KeccakHasher::new();
        let receipts = receipts_for(&self.transactions);
        let header = Header {
            parent_hash: parent.hash(),
            number: parent.number + 1,
            difficulty: parent.difficulty,
            gas_limit: parent.gas_limit,
            gas_used: receipts.last().map_or(0, |r| r.cumulative_gas_used),
            timestamp: parent.timestamp + 12,
            uncle_hash: hasher.merkle_root(&encode_all(&self.uncles)),
            transactions_root: hasher.merkle_root(&encode_all(&self.transactions)),
            receipts_root: hasher.merkle_root(&encode_all(&receipts)),
            logs_bloom: hasher.create_bloom(&receipts),
            state_root: self.state_root,
            extra_data: vec![self.tag],
            ..Default::default()
        };
        (Block::new(header, self.transactions, self.uncles), receipts)
    }
}
