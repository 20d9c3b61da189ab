//! Fork-activation rules

use serde::{Deserialize, Serialize};

/// How the post-state root is derived for a given block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateRootVariant {
    /// Empty accounts are kept in the state.
    Legacy,
    /// Touched empty accounts are deleted before the root is taken.
    DeleteEmptyObjects,
}

impl StateRootVariant {
    pub fn deletes_empty_objects(&self) -> bool {
        matches!(self, StateRootVariant::DeleteEmptyObjects)
    }
}

/// Chain-wide fork configuration. Read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_id: u64,
    /// First block with empty-object deletion, `None` if never activated.
    pub eip158_block: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: 1337,
            eip158_block: Some(0),
        }
    }
}

impl ChainConfig {
    pub fn is_eip158(&self, number: u64) -> bool {
        self.eip158_block.is_some_and(|fork| number >= fork)
    }

    /// Intermediate-root variant in force at block `number`.
    pub fn state_root_variant(&self, number: u64) -> StateRootVariant {
        if self.is_eip158(number) {
            StateRootVariant::DeleteEmptyObjects
        } else {
            StateRootVariant::Legacy
        }
    }
}
