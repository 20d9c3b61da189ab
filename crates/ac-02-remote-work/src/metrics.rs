//! # Remote-Work Metrics
//!
//! Prometheus metrics for the remote sealer. Enable with the `metrics`
//! feature; without it every recorder is a no-op.
//!
//! - `remote_work_packages_pushed_total` - Work packages installed
//! - `remote_work_submissions_total` - Solution submissions (by outcome)
//! - `remote_work_hashrate_reports_total` - Hashrate reports recorded

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref PACKAGES_PUSHED: IntCounter = register_int_counter!(
        "remote_work_packages_pushed_total",
        "Total number of work packages offered to remote solvers"
    )
    .expect("Failed to create PACKAGES_PUSHED metric");

    pub static ref SUBMISSIONS: IntCounterVec = register_int_counter_vec!(
        "remote_work_submissions_total",
        "Total number of remote solution submissions",
        &["outcome"]
    )
    .expect("Failed to create SUBMISSIONS metric");

    pub static ref HASHRATE_REPORTS: IntCounter = register_int_counter!(
        "remote_work_hashrate_reports_total",
        "Total number of remote hashrate reports"
    )
    .expect("Failed to create HASHRATE_REPORTS metric");
}

#[cfg(feature = "metrics")]
pub fn record_work_pushed() {
    PACKAGES_PUSHED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_submission(outcome: &str) {
    SUBMISSIONS.with_label_values(&[outcome]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_hashrate_report() {
    HASHRATE_REPORTS.inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_work_pushed() {}

#[cfg(not(feature = "metrics"))]
pub fn record_submission(_outcome: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_hashrate_report() {}
