//! Classic insertion sort, instrumented.

use crate::metrics::MetricsTracker;

/// Sorts `seq` in place, reporting every operation to `metrics`.
///
/// Cost accounting per outer index `i`: 1 access for the key read, then 1
/// comparison + 1 access for the early-exit probe against the predecessor.
/// When the probe fails, the backward scan pays 1 comparison + 1 access per
/// probed element, 1 move + 1 access per shift, and 1 access for the final
/// key write. A scan that stops on `seq[j] <= key` has already paid for that
/// failed probe; a scan that runs off the front of the sequence pays nothing
/// extra.
///
/// Stable: the scan stops at the first `seq[j] <= key`, so equal keys never
/// move past each other. Cost degrades to n - 1 comparisons and zero moves on
/// already sorted input.
pub fn sort<T>(seq: &mut [T], metrics: &mut MetricsTracker)
where
    T: Ord + Copy,
{
    if seq.len() < 2 {
        return;
    }

    for i in 1..seq.len() {
        let key = seq[i];
        metrics.record_access();

        // Early-exit: already in place, skip the scan entirely.
        metrics.record_comparison();
        metrics.record_access();
        if key >= seq[i - 1] {
            continue;
        }

        let mut j = i;
        while j > 0 {
            metrics.record_comparison();
            metrics.record_access();
            if seq[j - 1] > key {
                seq[j] = seq[j - 1];
                metrics.record_access();
                metrics.record_move();
                j -= 1;
            } else {
                break;
            }
        }

        seq[j] = key;
        metrics.record_access();
    }
}
