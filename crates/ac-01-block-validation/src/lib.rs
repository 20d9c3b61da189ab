//! # ac-01-block-validation
//!
//! Block validation subsystem.
//!
//! ## Architecture
//!
//! Every block passes two stages on its way into the chain:
//!
//! ```text
//! Block ──validate_body──→ [external execution] ──validate_state──→ import
//!           │                                        │
//!           ├─ known block                           ├─ gas used (sync)
//!           ├─ uncles + uncle root                   ├─ bloom
//!           ├─ transaction root                      ├─ receipt root
//!           └─ ancestor availability                 └─ state root
//! ```
//!
//! The checks of a stage are independent and read-only, so they run
//! concurrently on the rayon pool. The first failure observed is returned.
//! When a block breaks several rules, any one of the applicable errors may
//! be reported.
//!
//! The gas-limit calculator lives here too, since its output is a
//! consensus-checked header field.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ac_01_block_validation::{BlockValidator, BlockValidatorDependencies, BlockValidationApi};
//!
//! let validator = BlockValidator::new(BlockValidatorDependencies {
//!     chain,
//!     engine,
//!     hasher: Arc::new(KeccakHasher),
//!     config: ChainConfig::default(),
//! });
//!
//! validator.validate_body(&block)?;
//! let (state, receipts, used_gas) = executor.apply(&block);
//! validator.validate_state(&block, &state, &receipts, used_gas)?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{InMemoryChain, KeccakHasher, KeccakPowEngine};
pub use config::ValidationConfig;
pub use domain::{
    ChainConfig, GasBounds, GasLimitCalculator, StateRootVariant, GAS_LIMIT_BOUND_DIVISOR,
    GENESIS_GAS_LIMIT, MIN_GAS_LIMIT,
};
pub use error::{BlockValidationError, ConfigError, ErrorClass, ValidationResult};
pub use ports::{BlockValidationApi, ChainHasher, PostState};
pub use service::{BlockValidator, BlockValidatorDependencies};
