//! Total recorded minutes over a collection of recordings.

use parley_types::Recording;

/// Sums the durations of `recordings` in fractional minutes.
///
/// Recomputed from the full collection on every call; sessions never keep
/// a running total.
pub fn total_minutes(recordings: &[Recording]) -> f64 {
    recordings.iter().map(|r| r.duration().as_minutes()).sum()
}
