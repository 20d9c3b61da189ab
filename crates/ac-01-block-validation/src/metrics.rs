//! # Validation Metrics
//!
//! Prometheus metrics for block validation.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! ac-01-block-validation = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `validation_blocks_validated_total` - Blocks that passed a stage (by stage)
//! - `validation_blocks_rejected_total` - Blocks rejected (by reason)
//! - `validation_latency_seconds` - Histogram of validation times (by stage)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Blocks that passed validation, labeled by stage (body/state)
    pub static ref BLOCKS_VALIDATED: IntCounterVec = register_int_counter_vec!(
        "validation_blocks_validated_total",
        "Total number of blocks that passed a validation stage",
        &["stage"]
    )
    .expect("Failed to create BLOCKS_VALIDATED metric");

    /// Blocks rejected, labeled by rejection reason
    pub static ref BLOCKS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "validation_blocks_rejected_total",
        "Total number of blocks rejected",
        &["reason"]
    )
    .expect("Failed to create BLOCKS_REJECTED metric");

    /// Validation latency, labeled by stage
    pub static ref VALIDATION_LATENCY: HistogramVec = register_histogram_vec!(
        "validation_latency_seconds",
        "Time taken to validate a block in seconds",
        &["stage"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to create VALIDATION_LATENCY metric");
}

#[cfg(feature = "metrics")]
pub fn record_block_validated(stage: &str) {
    BLOCKS_VALIDATED.with_label_values(&[stage]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_block_rejected(reason: &str) {
    BLOCKS_REJECTED.with_label_values(&[reason]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_validation_latency(stage: &str, seconds: f64) {
    VALIDATION_LATENCY.with_label_values(&[stage]).observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_block_validated(_stage: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_block_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_validation_latency(_stage: &str, _seconds: f64) {}
