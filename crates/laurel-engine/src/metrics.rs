//! Prometheus metrics for the decision engine
//!
//! Tracks mechanism invocations, tie-break outcomes, and degenerate-input
//! rejections.

use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

/// Completed elections by mechanism
pub static ELECTIONS_SCORED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "laurel_elections_scored_total",
        "Total elections scored to completion",
        &["mechanism"]
    )
    .unwrap()
});

/// Tie-break cascade outcomes by resolving stage
pub static TIE_BREAKS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "laurel_tie_breaks_total",
        "Tie-break cascade outcomes",
        &["stage"]
    )
    .unwrap()
});

/// Inputs rejected before scoring
pub static DEGENERATE_INPUTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "laurel_degenerate_inputs_total",
        "Inputs rejected as degenerate",
        &["kind"]
    )
    .unwrap()
});
