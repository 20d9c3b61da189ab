//! Domain layer: pure gas-limit arithmetic and fork rules.

pub mod fork;
pub mod gas_limit;

pub use fork::{ChainConfig, StateRootVariant};
pub use gas_limit::{
    GasBounds, GasLimitCalculator, GAS_LIMIT_BOUND_DIVISOR, GENESIS_GAS_LIMIT, MIN_GAS_LIMIT,
};
