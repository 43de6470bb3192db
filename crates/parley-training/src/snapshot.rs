//! Read-only view of a training session, handed to the view layer after
//! every mutation.

use parley_types::{Recording, RecordingId, TrainingStatus};
use serde::Serialize;

use crate::plural::{format_count, RECORDING_FORMS};
use crate::progress;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSnapshot {
    pub status: TrainingStatus,
    /// Oldest first.
    pub recordings: Vec<Recording>,
    pub total_minutes: f64,
    pub target_minutes: f64,
    pub confidence: u8,
    pub sample_count: u32,
    pub percentage: u8,
}

impl TrainingSnapshot {
    /// The most recently added recording.
    pub fn latest(&self) -> Option<&Recording> {
        self.recordings.last()
    }

    /// Whether `id` is the most recently added recording ("new" badge).
    pub fn is_latest(&self, id: RecordingId) -> bool {
        self.latest().is_some_and(|r| r.id() == id)
    }

    pub fn remaining_minutes(&self) -> f64 {
        progress::remaining_minutes(self.total_minutes, self.target_minutes)
    }

    /// `5.3/10.0`-style progress line.
    pub fn minutes_label(&self) -> String {
        format!(
            "{}/{}",
            progress::format_minutes(self.total_minutes),
            progress::format_minutes(self.target_minutes)
        )
    }

    /// Pluralised recording count, e.g. `3 аудиозаписи`.
    pub fn recording_count_label(&self) -> String {
        format_count(self.recordings.len() as u64, &RECORDING_FORMS)
    }
}
