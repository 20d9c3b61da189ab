//! In-memory chain adapter
//!
//! Implements the ChainView port over a header map with per-block state
//! availability. State can be pruned independently of the block.

use parking_lot::RwLock;
use shared_types::{Block, ChainView, Header, H256};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct StoredBlock {
    header: Header,
    uncles: Vec<Header>,
    has_state: bool,
}

/// In-memory chain for the runtime and tests
#[derive(Debug, Default)]
pub struct InMemoryChain {
    blocks: RwLock<HashMap<H256, StoredBlock>>,
}

impl InMemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain seeded with a genesis header whose state is available.
    pub fn with_genesis(genesis: Header) -> Self {
        let chain = Self::new();
        chain.insert_header(genesis, true);
        chain
    }

    pub fn insert_header(&self, header: Header, has_state: bool) -> H256 {
        self.store(header, Vec::new(), has_state)
    }

    /// Store a block after successful import (state available).
    pub fn insert_block(&self, block: &Block) -> H256 {
        self.store(block.header.clone(), block.uncles.clone(), true)
    }

    fn store(&self, header: Header, uncles: Vec<Header>, has_state: bool) -> H256 {
        let hash = header.hash();
        self.blocks.write().insert(
            hash,
            StoredBlock {
                header,
                uncles,
                has_state,
            },
        );
        hash
    }

    /// Drop the state of a block, keeping the block itself.
    pub fn prune_state(&self, hash: H256) -> bool {
        match self.blocks.write().get_mut(&hash) {
            Some(stored) => {
                stored.has_state = false;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }
}

impl ChainView for InMemoryChain {
    fn has_block_and_state(&self, hash: H256, number: u64) -> bool {
        self.blocks
            .read()
            .get(&hash)
            .is_some_and(|stored| stored.header.number == number && stored.has_state)
    }

    fn has_block(&self, hash: H256, number: u64) -> bool {
        self.blocks
            .read()
            .get(&hash)
            .is_some_and(|stored| stored.header.number == number)
    }

    fn header(&self, hash: H256) -> Option<Header> {
        self.blocks.read().get(&hash).map(|stored| stored.header.clone())
    }

    fn uncles(&self, hash: H256) -> Option<Vec<Header>> {
        self.blocks.read().get(&hash).map(|stored| stored.uncles.clone())
    }
}
