//! Configuration types for the remote-work coordinator

use crate::error::ConfigError;
use serde::Deserialize;
use shared_types::PowAlgorithm;
use std::time::Duration;

/// Remote-work runtime configuration
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RemoteWorkConfig {
    /// Serve remote solvers at all. When false every call is `Unsupported`.
    pub enabled: bool,

    /// Upper bound on each request/reply round trip
    pub request_timeout_ms: u64,

    /// Hashrate reports older than this no longer count
    pub hashrate_expiry_secs: u64,

    /// How often expired hashrate reports are dropped
    pub purge_interval_secs: u64,

    /// Superseded packages remembered for stale classification
    pub stale_history: usize,

    /// Request queue capacity
    pub request_buffer: usize,

    /// Sealed-block queue capacity
    pub results_buffer: usize,

    /// Algorithm tag advertised in work packages
    pub algorithm: PowAlgorithm,
}

impl Default for RemoteWorkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            request_timeout_ms: 5_000,
            hashrate_expiry_secs: 10,
            purge_interval_secs: 5,
            stale_history: 7,
            request_buffer: 64,
            results_buffer: 16,
            algorithm: PowAlgorithm::Keccak256,
        }
    }
}

impl RemoteWorkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.purge_interval_secs == 0 {
            return Err(ConfigError::ZeroPurgeInterval);
        }
        if self.request_buffer == 0 {
            return Err(ConfigError::ZeroCapacity("request_buffer"));
        }
        if self.results_buffer == 0 {
            return Err(ConfigError::ZeroCapacity("results_buffer"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn hashrate_expiry(&self) -> Duration {
        Duration::from_secs(self.hashrate_expiry_secs)
    }

    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs)
    }
}
