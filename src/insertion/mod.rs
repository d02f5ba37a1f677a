//! The insertion sort family and its checked entry points.
//!
//! The variant modules expose raw `sort` functions over `&mut [T]` plus an
//! exclusive tracker reference. The entry points here add the boundary
//! contract shared by all of them: an absent sequence is rejected as
//! [`Error::InvalidSequence`] before any state is touched, a missing tracker
//! is replaced with a throwaway one, and length <= 1 is a no-op success.

pub mod adaptive;
pub mod binary_search;
pub mod standard;

use tracing::debug;

use crate::metrics::MetricsTracker;
use crate::Error;

/// Tagged choice between the two pure sort strategies. Produced by the
/// sortedness probe and returned by [`adaptive_sort`] so callers can see
/// which path ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Standard,
    BinarySearch,
}

impl Strategy {
    pub(crate) fn run<T>(self, seq: &mut [T], metrics: &mut MetricsTracker)
    where
        T: Ord + Copy,
    {
        match self {
            Strategy::Standard => standard::sort(seq, metrics),
            Strategy::BinarySearch => binary_search::sort(seq, metrics),
        }
    }
}

/// Classic insertion sort with the early-exit optimization.
pub fn standard_sort<T>(
    seq: Option<&mut [T]>,
    metrics: Option<&mut MetricsTracker>,
) -> Result<(), Error>
where
    T: Ord + Copy,
{
    let seq = seq.ok_or(Error::InvalidSequence)?;
    let mut scratch = MetricsTracker::new();
    standard::sort(seq, metrics.unwrap_or(&mut scratch));
    Ok(())
}

/// Insertion sort locating each slot by binary search over the sorted prefix.
pub fn binary_search_sort<T>(
    seq: Option<&mut [T]>,
    metrics: Option<&mut MetricsTracker>,
) -> Result<(), Error>
where
    T: Ord + Copy,
{
    let seq = seq.ok_or(Error::InvalidSequence)?;
    let mut scratch = MetricsTracker::new();
    binary_search::sort(seq, metrics.unwrap_or(&mut scratch));
    Ok(())
}

/// Probes the input's sortedness, then delegates to the strategy that handles
/// that shape best. Returns the strategy that ran.
pub fn adaptive_sort<T>(
    seq: Option<&mut [T]>,
    metrics: Option<&mut MetricsTracker>,
) -> Result<Strategy, Error>
where
    T: Ord + Copy,
{
    let seq = seq.ok_or(Error::InvalidSequence)?;
    let mut scratch = MetricsTracker::new();
    Ok(adaptive::sort(seq, metrics.unwrap_or(&mut scratch)))
}

/// Resets the tracker counters, times one run of the given strategy and stops
/// the clock. The snapshot history survives the reset, so repeated measured
/// runs build a comparison series on one tracker.
pub fn measured_sort<T>(
    seq: Option<&mut [T]>,
    strategy: Strategy,
    metrics: &mut MetricsTracker,
) -> Result<(), Error>
where
    T: Ord + Copy,
{
    let seq = seq.ok_or(Error::InvalidSequence)?;
    debug!(len = seq.len(), ?strategy, "measured run");

    metrics.reset();
    metrics.start_timing();
    strategy.run(seq, metrics);
    metrics.stop_timing();
    Ok(())
}

/// Pure sortedness predicate. O(n), no tracker effects, true for len <= 1.
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Sorts a private copy with the standard strategy and returns it. The
/// original sequence is left untouched.
pub fn sorted_copy<T>(seq: Option<&[T]>) -> Result<Vec<T>, Error>
where
    T: Ord + Copy,
{
    let seq = seq.ok_or(Error::InvalidSequence)?;
    let mut copy = seq.to_vec();
    let mut scratch = MetricsTracker::new();
    standard::sort(&mut copy, &mut scratch);
    Ok(copy)
}
