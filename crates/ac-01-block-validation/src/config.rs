//! Configuration types for block validation

use crate::domain::{
    ChainConfig, GasBounds, GasLimitCalculator, GAS_LIMIT_BOUND_DIVISOR, MIN_GAS_LIMIT,
};
use crate::error::ConfigError;
use serde::Deserialize;

/// Process-wide validation settings, read-only after startup
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Fork rules
    pub chain: ChainConfig,

    /// Target gas-limit range for locally produced blocks
    pub gas_bounds: GasBounds,

    /// Maximum per-block gas-limit change is `parent / bound_divisor`
    pub bound_divisor: u64,

    /// Lowest allowed gas limit
    pub min_gas_limit: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig::default(),
            gas_bounds: GasBounds::default(),
            bound_divisor: GAS_LIMIT_BOUND_DIVISOR,
            min_gas_limit: MIN_GAS_LIMIT,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gas_bounds.floor > self.gas_bounds.ceiling {
            return Err(ConfigError::InvalidGasBounds {
                floor: self.gas_bounds.floor,
                ceiling: self.gas_bounds.ceiling,
            });
        }
        if self.bound_divisor == 0 {
            return Err(ConfigError::ZeroBoundDivisor);
        }
        Ok(())
    }

    pub fn gas_calculator(&self) -> GasLimitCalculator {
        GasLimitCalculator::new(self.bound_divisor, self.min_gas_limit)
    }
}
