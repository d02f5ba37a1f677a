//! Operation counting and timing for the sort implementations.
//!
//! A [`MetricsTracker`] is constructed by the caller and handed by exclusive
//! reference into each sort call. Nothing here is global and nothing is
//! thread-safe by itself; `&mut` access models the single-writer contract.

use std::time::{Duration, Instant};

/// Mutable counters plus a wall-clock interval, with an append-only snapshot
/// history on the side.
///
/// The counters are independent of the timing interval. They can be bumped in
/// any state, and `reset` clears both without touching saved snapshots.
#[derive(Debug, Default)]
pub struct MetricsTracker {
    comparisons: u64,
    moves: u64,
    accesses: u64,
    start: Option<Instant>,
    end: Option<Instant>,
    snapshots: Vec<Snapshot>,
}

/// Immutable point-in-time sample of the tracker state.
///
/// Field order is the contract external reporting layers rely on when they
/// serialize a snapshot as one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub input_size: usize,
    pub comparisons: u64,
    pub moves: u64,
    pub accesses: u64,
    pub elapsed: Duration,
    pub label: String,
}

/// Derived arithmetic mean over a set of snapshots. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSummary {
    pub samples: usize,
    pub comparisons: f64,
    pub moves: f64,
    pub accesses: f64,
    pub elapsed: Duration,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn record_comparisons(&mut self, count: u64) {
        self.comparisons += count;
    }

    #[inline]
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    #[inline]
    pub fn record_moves(&mut self, count: u64) {
        self.moves += count;
    }

    #[inline]
    pub fn record_access(&mut self) {
        self.accesses += 1;
    }

    #[inline]
    pub fn record_accesses(&mut self, count: u64) {
        self.accesses += count;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Marks the start of the measured interval. Calling it again overwrites
    /// the previous start and discards any recorded end, last-write-wins.
    pub fn start_timing(&mut self) {
        self.start = Some(Instant::now());
        self.end = None;
    }

    /// Marks the end of the measured interval.
    pub fn stop_timing(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Elapsed time of the last complete interval. Reports zero when the
    /// interval was never started or never stopped; that is the documented
    /// degenerate case, not an error.
    pub fn elapsed(&self) -> Duration {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Zeroes the counters and clears the timing interval. The snapshot
    /// history is a separate append-only record and survives resets.
    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.moves = 0;
        self.accesses = 0;
        self.start = None;
        self.end = None;
    }

    /// Captures the current counters and elapsed time into a new snapshot and
    /// appends it to the history. Counters keep running.
    pub fn save_snapshot(&mut self, input_size: usize, label: impl Into<String>) {
        let snapshot = Snapshot {
            input_size,
            comparisons: self.comparisons,
            moves: self.moves,
            accesses: self.accesses,
            elapsed: self.elapsed(),
            label: label.into(),
        };
        self.snapshots.push(snapshot);
    }

    /// Read-only view of the history, in chronological order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Arithmetic mean of each counter and of elapsed time across the given
    /// snapshots. `None` for an empty set.
    pub fn average_across(snapshots: &[Snapshot]) -> Option<SnapshotSummary> {
        if snapshots.is_empty() {
            return None;
        }

        let samples = snapshots.len();
        let div = samples as f64;
        let total_elapsed: Duration = snapshots.iter().map(|s| s.elapsed).sum();

        Some(SnapshotSummary {
            samples,
            comparisons: snapshots.iter().map(|s| s.comparisons).sum::<u64>() as f64 / div,
            moves: snapshots.iter().map(|s| s.moves).sum::<u64>() as f64 / div,
            accesses: snapshots.iter().map(|s| s.accesses).sum::<u64>() as f64 / div,
            elapsed: total_elapsed / samples as u32,
        })
    }
}
