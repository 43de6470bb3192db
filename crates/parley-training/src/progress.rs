//! Completion percentage and progress presentation.

use parley_types::TrainingStatus;

/// Highest percentage reported before completion.
const MAX_UNFINISHED_PERCENTAGE: u8 = 99;

/// Maps recorded minutes onto a completion percentage in `[0, 100]`.
///
/// 100 is reserved for completed sessions: a completed session always
/// reports 100, even if its total later falls below the target, and any
/// other session reports at most 99, even at `9:58` of `10:00` or when
/// resumed in progress above the target. Below that the ratio is rounded
/// half away from zero (`52.5 -> 53`).
pub fn percentage(total_minutes: f64, target_minutes: f64, status: TrainingStatus) -> u8 {
    if status == TrainingStatus::Completed {
        return 100;
    }
    if target_minutes.is_nan() || target_minutes <= 0.0 || !total_minutes.is_finite() {
        return 0;
    }
    let ratio = (total_minutes * 100.0 / target_minutes).clamp(0.0, 100.0);
    (ratio.round() as u8).min(MAX_UNFINISHED_PERCENTAGE)
}

/// Minutes still missing before the target is reached, never negative.
pub fn remaining_minutes(total_minutes: f64, target_minutes: f64) -> f64 {
    (target_minutes - total_minutes).max(0.0)
}

/// Formats minutes with one decimal place, e.g. `5.3`.
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes:.1}")
}
