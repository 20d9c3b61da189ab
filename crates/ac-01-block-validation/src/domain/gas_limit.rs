//! Gas-limit adjustment
//!
//! Derives the next block's gas ceiling from its parent. The arithmetic is
//! consensus-critical: unsigned 64-bit, truncating division, wrapping on
//! overflow, in exactly this operation order.

use serde::{Deserialize, Serialize};
use shared_types::Header;

/// Gas limit of the genesis block.
pub const GENESIS_GAS_LIMIT: u64 = 4_712_388;

/// Lowest gas limit a block may have.
pub const MIN_GAS_LIMIT: u64 = 5_000;

/// Bound divisor: the limit moves by at most `parent / divisor` per block.
pub const GAS_LIMIT_BOUND_DIVISOR: u64 = 1_024;

/// Target range the miner steers the gas limit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasBounds {
    pub floor: u64,
    pub ceiling: u64,
}

impl GasBounds {
    pub fn new(floor: u64, ceiling: u64) -> Self {
        Self { floor, ceiling }
    }
}

impl Default for GasBounds {
    fn default() -> Self {
        Self {
            floor: 8_000_000,
            ceiling: 12_000_000,
        }
    }
}

/// Pure gas-limit control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasLimitCalculator {
    bound_divisor: u64,
    min_gas_limit: u64,
}

impl Default for GasLimitCalculator {
    fn default() -> Self {
        Self::new(GAS_LIMIT_BOUND_DIVISOR, MIN_GAS_LIMIT)
    }
}

impl GasLimitCalculator {
    /// A zero divisor is treated as 1.
    pub fn new(bound_divisor: u64, min_gas_limit: u64) -> Self {
        Self {
            bound_divisor: bound_divisor.max(1),
            min_gas_limit,
        }
    }

    pub fn bound_divisor(&self) -> u64 {
        self.bound_divisor
    }

    pub fn min_gas_limit(&self) -> u64 {
        self.min_gas_limit
    }

    /// Compute the gas limit of the block after a parent with the given
    /// usage and limit.
    ///
    /// Usage above two thirds of the parent limit pushes the limit up,
    /// usage below pulls it down. Outside `[floor, ceiling]` the limit
    /// moves toward the range by at most one decay step.
    pub fn calc_gas_limit(
        &self,
        parent_gas_used: u64,
        parent_gas_limit: u64,
        floor: u64,
        ceiling: u64,
    ) -> u64 {
        let contribution =
            parent_gas_used.wrapping_add(parent_gas_used / 2) / self.bound_divisor;
        let decay = (parent_gas_limit / self.bound_divisor).wrapping_sub(1);

        let mut limit = parent_gas_limit
            .wrapping_sub(decay)
            .wrapping_add(contribution);
        if limit < self.min_gas_limit {
            limit = self.min_gas_limit;
        }

        if limit < floor {
            limit = parent_gas_limit.wrapping_add(decay);
            if limit > floor {
                limit = floor;
            }
        } else if limit > ceiling {
            limit = parent_gas_limit.wrapping_sub(decay);
            if limit < ceiling {
                limit = ceiling;
            }
        }
        limit
    }

    /// Gas limit for a child of `parent`.
    pub fn for_parent(&self, parent: &Header, bounds: GasBounds) -> u64 {
        self.calc_gas_limit(
            parent.gas_used,
            parent.gas_limit,
            bounds.floor,
            bounds.ceiling,
        )
    }
}
