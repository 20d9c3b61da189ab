//! Driving ports (API offered to the import pipeline)

use super::outbound::PostState;
use crate::error::ValidationResult;
use shared_types::{Block, Receipt};

/// Block validation API
///
/// Both calls borrow their inputs read-only and never mutate them.
pub trait BlockValidationApi: Send + Sync {
    /// Pre-execution checks: known block, uncles, uncle root,
    /// transaction root, ancestor availability.
    fn validate_body(&self, block: &Block) -> ValidationResult<()>;

    /// Post-execution checks: gas used, bloom, receipt root, state root.
    fn validate_state(
        &self,
        block: &Block,
        state: &dyn PostState,
        receipts: &[Receipt],
        used_gas: u64,
    ) -> ValidationResult<()>;
}
