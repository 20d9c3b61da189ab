//! # Node Configuration
//!
//! Aggregates the subsystem configs and applies `AC_*` environment
//! overrides on top of the defaults.
//!
//! ## Invariants
//!
//! - Gas floor never exceeds the gas ceiling
//! - Bound divisor, request timeout and channel capacities are non-zero

use crate::genesis::{GenesisConfig, GenesisError};
use ac_01_block_validation::ValidationConfig;
use ac_02_remote_work::RemoteWorkConfig;
use serde::Deserialize;
use shared_types::Address;
use thiserror::Error;
use tracing::warn;

/// Complete node configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Block validation and gas-limit settings.
    pub validation: ValidationConfig,
    /// Remote sealing settings.
    pub remote_work: RemoteWorkConfig,
    /// Genesis block parameters.
    pub genesis: GenesisConfig,
    /// Beneficiary written into locally built block templates.
    pub coinbase: Address,
}

impl NodeConfig {
    /// Defaults overridden by whatever `AC_*` variables are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from `lookup`. Unparseable values are logged and
    /// skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(floor) = parse_var(&lookup, "AC_GAS_FLOOR") {
            self.validation.gas_bounds.floor = floor;
        }
        if let Some(ceiling) = parse_var(&lookup, "AC_GAS_CEIL") {
            self.validation.gas_bounds.ceiling = ceiling;
        }
        if let Some(enabled) = parse_var(&lookup, "AC_REMOTE_WORK") {
            self.remote_work.enabled = enabled;
        }
        if let Some(timeout) = parse_var(&lookup, "AC_REQUEST_TIMEOUT_MS") {
            self.remote_work.request_timeout_ms = timeout;
        }
        if let Some(v) = lookup("AC_EIP158_BLOCK") {
            // "none" disables the fork entirely
            if v.eq_ignore_ascii_case("none") {
                self.validation.chain.eip158_block = None;
            } else if let Ok(block) = v.parse() {
                self.validation.chain.eip158_block = Some(block);
            } else {
                warn!(key = "AC_EIP158_BLOCK", value = %v, "Ignoring unparseable override");
            }
        }
        if let Some(chain_id) = parse_var(&lookup, "AC_CHAIN_ID") {
            self.validation.chain.chain_id = chain_id;
        }
        if let Some(difficulty) = parse_var::<u64, _>(&lookup, "AC_GENESIS_DIFFICULTY") {
            self.genesis.difficulty = difficulty.into();
        }
        if let Some(v) = lookup("AC_COINBASE") {
            match parse_address(&v) {
                Some(address) => self.coinbase = address,
                None => warn!(key = "AC_COINBASE", value = %v, "Ignoring unparseable override"),
            }
        }
    }

    /// Check cross-field constraints of every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()?;
        self.remote_work.validate()?;
        self.genesis.validate()?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation config: {0}")]
    Validation(#[from] ac_01_block_validation::ConfigError),

    #[error("remote work config: {0}")]
    RemoteWork(#[from] ac_02_remote_work::ConfigError),

    #[error("genesis config: {0}")]
    Genesis(#[from] GenesisError),
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable override");
            None
        }
    }
}

fn parse_address(raw: &str) -> Option<Address> {
    let bytes = hex::decode(raw.trim_start_matches("0x")).ok()?;
    (bytes.len() == 20).then(|| Address::from_slice(&bytes))
}
