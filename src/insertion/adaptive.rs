//! Adaptive dispatch between the two strategies, driven by a sortedness probe.

use tracing::debug;

use super::Strategy;
use crate::metrics::MetricsTracker;

/// Probes the input and runs the strategy suited to its shape: nearly sorted
/// input goes to the classic scan, whose early-exit makes it linear there;
/// everything else goes to the binary-search variant, which caps the
/// comparison blowup on disordered input. Returns the strategy that ran.
pub fn sort<T>(seq: &mut [T], metrics: &mut MetricsTracker) -> Strategy
where
    T: Ord + Copy,
{
    let strategy = sortedness(seq, metrics);
    debug!(len = seq.len(), ?strategy, "adaptive dispatch");

    strategy.run(seq, metrics);
    strategy
}

/// Single forward scan counting adjacent out-of-order pairs, 1 comparison +
/// 2 accesses each, reported through the tracker. Classifies the input as
/// nearly sorted while the count stays within len / 10 and short-circuits to
/// [`Strategy::BinarySearch`] the moment it goes over.
pub fn sortedness<T: Ord>(seq: &[T], metrics: &mut MetricsTracker) -> Strategy {
    let threshold = seq.len() / 10;
    let mut out_of_order = 0;

    for i in 1..seq.len() {
        metrics.record_comparison();
        metrics.record_accesses(2);
        if seq[i] < seq[i - 1] {
            out_of_order += 1;
            if out_of_order > threshold {
                return Strategy::BinarySearch;
            }
        }
    }

    Strategy::Standard
}
