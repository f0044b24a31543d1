//! # Trial Metrics
//!
//! Prometheus metrics for trial activity.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! bay-trial = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `botanybay_trials_started_total` - Counter of trials opened
//! - `botanybay_verdicts_total` - Counter of verdicts (by outcome)
//! - `botanybay_trials_voided_total` - Counter of trials voided by a disconnect
//! - `botanybay_trials_dismissed_total` - Counter of trials cancelled by an admin
//! - `botanybay_votes_total` - Counter of accepted votes (kind = first|changed)
//! - `botanybay_suspects_queued_total` - Counter of suspects condemned to the queue
//! - `botanybay_queue_depth` - Gauge of suspects awaiting trial

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_gauge, register_int_counter, register_int_counter_vec, Gauge, IntCounter,
    IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total trials opened
    pub static ref TRIALS_STARTED: IntCounter = register_int_counter!(
        "botanybay_trials_started_total",
        "Total number of trials opened"
    )
    .expect("Failed to create TRIALS_STARTED metric");

    /// Verdicts, labeled by outcome
    pub static ref VERDICTS: IntCounterVec = register_int_counter_vec!(
        "botanybay_verdicts_total",
        "Total number of verdicts reached",
        &["outcome"]
    )
    .expect("Failed to create VERDICTS metric");

    /// Trials voided because the accused left
    pub static ref TRIALS_VOIDED: IntCounter = register_int_counter!(
        "botanybay_trials_voided_total",
        "Total number of trials voided by a suspect disconnect"
    )
    .expect("Failed to create TRIALS_VOIDED metric");

    /// Trials dismissed by an admin
    pub static ref TRIALS_DISMISSED: IntCounter = register_int_counter!(
        "botanybay_trials_dismissed_total",
        "Total number of trials dismissed"
    )
    .expect("Failed to create TRIALS_DISMISSED metric");

    /// Accepted votes, labeled first or changed
    pub static ref VOTES: IntCounterVec = register_int_counter_vec!(
        "botanybay_votes_total",
        "Total number of accepted votes",
        &["kind"]
    )
    .expect("Failed to create VOTES metric");

    /// Suspects queued
    pub static ref SUSPECTS_QUEUED: IntCounter = register_int_counter!(
        "botanybay_suspects_queued_total",
        "Total number of suspects condemned to the queue"
    )
    .expect("Failed to create SUSPECTS_QUEUED metric");

    /// Current queue depth
    pub static ref QUEUE_DEPTH: Gauge = register_gauge!(
        "botanybay_queue_depth",
        "Number of suspects awaiting trial"
    )
    .expect("Failed to create QUEUE_DEPTH metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record a trial opened
#[cfg(feature = "metrics")]
pub fn record_trial_started() {
    TRIALS_STARTED.inc();
}

/// Record a verdict with its outcome id
#[cfg(feature = "metrics")]
pub fn record_verdict(outcome: &str) {
    VERDICTS.with_label_values(&[outcome]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_trial_voided() {
    TRIALS_VOIDED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_trial_dismissed() {
    TRIALS_DISMISSED.inc();
}

/// Record an accepted vote
#[cfg(feature = "metrics")]
pub fn record_vote(changed: bool) {
    let kind = if changed { "changed" } else { "first" };
    VOTES.with_label_values(&[kind]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_suspect_queued() {
    SUSPECTS_QUEUED.inc();
}

/// Update queue depth gauge
#[cfg(feature = "metrics")]
pub fn set_queue_depth(depth: usize) {
    QUEUE_DEPTH.set(depth as f64);
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_trial_started() {}

#[cfg(not(feature = "metrics"))]
pub fn record_verdict(_outcome: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_trial_voided() {}

#[cfg(not(feature = "metrics"))]
pub fn record_trial_dismissed() {}

#[cfg(not(feature = "metrics"))]
pub fn record_vote(_changed: bool) {}

#[cfg(not(feature = "metrics"))]
pub fn record_suspect_queued() {}

#[cfg(not(feature = "metrics"))]
pub fn set_queue_depth(_depth: usize) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording_does_not_panic() {
        record_trial_started();
        record_verdict("release");
        record_trial_voided();
        record_trial_dismissed();
        record_vote(false);
        record_vote(true);
        record_suspect_queued();
        set_queue_depth(3);
    }
}
