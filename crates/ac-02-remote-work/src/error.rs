//! Error types for the remote-work subsystem

use thiserror::Error;

/// Errors returned to remote-work callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoteWorkError {
    /// The coordinator is shutting down or has stopped.
    #[error("Remote sealer stopped")]
    EngineStopped,

    /// Remote mining is disabled on this node.
    #[error("Remote mining not supported")]
    Unsupported,

    /// No work package has been pushed yet.
    #[error("No mining work available yet")]
    NoWork,

    /// The coordinator did not answer in time.
    #[error("Remote sealer request timed out")]
    Timeout,
}

/// Detailed result of a solution submission.
///
/// The public API collapses everything but `Accepted` to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Nothing has been pushed yet.
    NoWork,
    /// The solution targets a package that has since been superseded.
    Stale,
    /// The pow-hash matches no known package.
    UnknownWork,
    /// The engine rejected the nonce.
    InvalidNonce,
    /// The current package was already sealed.
    AlreadySealed,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }

    /// Short label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => "accepted",
            SubmitOutcome::NoWork => "no_work",
            SubmitOutcome::Stale => "stale",
            SubmitOutcome::UnknownWork => "unknown_work",
            SubmitOutcome::InvalidNonce => "invalid_nonce",
            SubmitOutcome::AlreadySealed => "already_sealed",
        }
    }
}

/// Invalid remote-work configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Request timeout must be non-zero")]
    ZeroTimeout,

    #[error("Purge interval must be non-zero")]
    ZeroPurgeInterval,

    #[error("Channel capacity `{0}` must be non-zero")]
    ZeroCapacity(&'static str),
}
