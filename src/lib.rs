//! Instrumented insertion sort testbed.
//!
//! Pairs a small family of insertion-based sorts (classic with early-exit,
//! binary-search-assisted, and an adaptive dispatcher between the two) with a
//! [`metrics::MetricsTracker`] that counts comparisons, element moves and
//! element accesses and captures immutable snapshots, so that measured
//! behavior can be checked against the theoretical bounds.

use thiserror::Error;

pub mod insertion;
pub mod metrics;
pub mod patterns;

pub use insertion::{
    adaptive_sort, binary_search_sort, is_sorted, measured_sort, sorted_copy, standard_sort,
    Strategy,
};
pub use metrics::{MetricsTracker, Snapshot, SnapshotSummary};

/// Failures a sort entry point can report.
///
/// Raised at entry validation only. Once a sort pass starts it runs to
/// completion, so no mid-sort failure exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The caller passed no sequence at all. A zero-length sequence is not an
    /// error, absence is.
    #[error("input sequence is absent")]
    InvalidSequence,
}
