//! The training session aggregate.

use parley_types::{Recording, RecordingId, TrainingStatus};
use tracing::{debug, info, warn};

use crate::aggregate;
use crate::config::TrainingConfig;
use crate::ingest::IngestBatch;
use crate::progress;
use crate::snapshot::TrainingSnapshot;
use crate::state::{transition, StatusEvent, Transition};

/// One agent's voice-training workflow.
///
/// Owns the recordings, the sample counter and the confidence score. The
/// total recorded minutes are never stored; they are recomputed from the
/// recordings whenever needed.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    config: TrainingConfig,
    status: TrainingStatus,
    recordings: Vec<Recording>,
    sample_count: u32,
    confidence: u8,
}

impl TrainingSession {
    /// Creates an empty, not-started session.
    pub fn new(config: TrainingConfig) -> Self {
        Self::resume(config, TrainingStatus::NotStarted, Vec::new())
    }

    /// Resumes a session from a known status and recordings.
    ///
    /// A `NotStarted` status with recordings present is promoted to
    /// `InProgress`: recordings only exist after an ingestion. Any other
    /// status is taken as given and re-evaluated on the next mutation.
    pub fn resume(
        config: TrainingConfig,
        status: TrainingStatus,
        recordings: Vec<Recording>,
    ) -> Self {
        let status = if status == TrainingStatus::NotStarted && !recordings.is_empty() {
            warn!(
                count = recordings.len(),
                "resumed not-started session has recordings, treating as in-progress"
            );
            TrainingStatus::InProgress
        } else {
            status
        };
        let sample_count = u32::try_from(recordings.len()).unwrap_or(u32::MAX);
        Self {
            config,
            status,
            recordings,
            sample_count,
            confidence: 0,
        }
    }

    /// Overrides the resumed counters. Confidence is clamped to the cap.
    pub fn with_counters(mut self, sample_count: u32, confidence: u8) -> Self {
        self.sample_count = sample_count;
        self.confidence = confidence.min(self.config.confidence_cap);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn status(&self) -> TrainingStatus {
        self.status
    }

    pub fn recordings(&self) -> &[Recording] {
        &self.recordings
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn total_minutes(&self) -> f64 {
        aggregate::total_minutes(&self.recordings)
    }

    pub fn percentage(&self) -> u8 {
        progress::percentage(
            self.total_minutes(),
            self.config.target_minutes,
            self.status,
        )
    }

    /// Appends a batch and re-evaluates the status.
    ///
    /// An empty batch is not an ingestion and changes nothing.
    pub fn ingest(&mut self, batch: IngestBatch) -> Transition {
        if batch.recordings.is_empty() {
            return Transition::unchanged(self.status);
        }

        let added = batch.recordings.len();
        self.recordings.extend(batch.recordings);
        self.sample_count = self
            .sample_count
            .saturating_add(u32::try_from(added).unwrap_or(u32::MAX));
        self.confidence = self
            .confidence
            .saturating_add(batch.confidence_delta)
            .min(self.config.confidence_cap);

        let total_minutes = self.total_minutes();
        debug!(
            added,
            total_minutes,
            confidence = self.confidence,
            "ingested recordings"
        );
        self.apply(StatusEvent::Ingested {
            total_minutes,
            target_minutes: self.config.target_minutes,
        })
    }

    /// Removes the recording with `id`.
    ///
    /// Returns `None` and leaves the session untouched if no such recording
    /// exists. Confidence is not reduced by removals; whether a removal
    /// should give back what its recording earned is an open product
    /// question.
    pub fn remove(&mut self, id: RecordingId) -> Option<(Recording, Transition)> {
        let index = self.recordings.iter().position(|r| r.id() == id)?;
        let removed = self.recordings.remove(index);
        self.sample_count = self.sample_count.saturating_sub(1);

        let total_minutes = self.total_minutes();
        debug!(%id, total_minutes, "removed recording");
        let transition = self.apply(StatusEvent::Removed {
            total_minutes,
            target_minutes: self.config.target_minutes,
        });
        Some((removed, transition))
    }

    pub fn snapshot(&self) -> TrainingSnapshot {
        TrainingSnapshot {
            status: self.status,
            recordings: self.recordings.clone(),
            total_minutes: self.total_minutes(),
            target_minutes: self.config.target_minutes,
            confidence: self.confidence,
            sample_count: self.sample_count,
            percentage: self.percentage(),
        }
    }

    fn apply(&mut self, event: StatusEvent) -> Transition {
        let transition = transition(self.status, event);
        if transition.changed() {
            info!(
                from = %transition.from,
                to = %transition.to,
                "training status changed"
            );
        }
        self.status = transition.to;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Signal;
    use chrono::NaiveDate;
    use parley_types::{ClipDuration, RecordingKind};

    fn rec(duration: &str) -> Recording {
        let at = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Recording::new(
            "r",
            at,
            duration.parse::<ClipDuration>().unwrap(),
            RecordingKind::Call,
        )
    }

    fn batch(durations: &[&str], delta: u8) -> IngestBatch {
        IngestBatch {
            recordings: durations.iter().map(|d| rec(d)).collect(),
            confidence_delta: delta,
        }
    }

    #[test]
    fn new_session_is_empty_and_not_started() {
        let session = TrainingSession::new(TrainingConfig::default());
        assert_eq!(session.status(), TrainingStatus::NotStarted);
        assert!(session.recordings().is_empty());
        assert_eq!(session.total_minutes(), 0.0);
        assert_eq!(session.percentage(), 0);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut session = TrainingSession::new(TrainingConfig::default());
        let before = session.snapshot();
        let t = session.ingest(batch(&[], 10));
        assert!(t.signals.is_empty());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn confidence_delta_applies_once_per_batch_and_caps() {
        let mut session = TrainingSession::new(TrainingConfig::default());
        session.ingest(batch(&["0:10", "0:10", "0:10", "0:10"], 10));
        assert_eq!(session.confidence(), 10);
        assert_eq!(session.sample_count(), 4);

        for _ in 0..10 {
            session.ingest(batch(&["0:01"], 15));
        }
        assert_eq!(session.confidence(), 95);
    }

    #[test]
    fn removal_keeps_confidence() {
        let mut session = TrainingSession::new(TrainingConfig::default());
        session.ingest(batch(&["1:00"], 15));
        let id = session.recordings()[0].id();
        session.remove(id).expect("recording exists");
        // Removing audio does not lower confidence.
        assert_eq!(session.confidence(), 15);
        assert_eq!(session.sample_count(), 0);
        assert_eq!(session.status(), TrainingStatus::InProgress);
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let mut session = TrainingSession::new(TrainingConfig::default());
        session.ingest(batch(&["1:00", "2:00"], 10));
        let before = session.snapshot();
        assert!(session.remove(RecordingId::new()).is_none());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn sample_count_floors_at_zero() {
        let mut session = TrainingSession::resume(
            TrainingConfig::default(),
            TrainingStatus::InProgress,
            vec![rec("1:00")],
        )
        .with_counters(0, 20);
        let id = session.recordings()[0].id();
        session.remove(id);
        assert_eq!(session.sample_count(), 0);
    }

    #[test]
    fn resume_promotes_not_started_with_recordings() {
        let session = TrainingSession::resume(
            TrainingConfig::default(),
            TrainingStatus::NotStarted,
            vec![rec("1:00")],
        );
        assert_eq!(session.status(), TrainingStatus::InProgress);
        assert_eq!(session.sample_count(), 1);
    }

    #[test]
    fn resume_keeps_given_completed_status() {
        let mut session = TrainingSession::resume(
            TrainingConfig::default(),
            TrainingStatus::Completed,
            vec![rec("3:00"), rec("2:00")],
        );
        assert_eq!(session.percentage(), 100);

        let id = session.recordings()[1].id();
        let (_, t) = session.remove(id).unwrap();
        assert_eq!(t.signals, vec![Signal::Reverted]);
        assert_eq!(session.percentage(), 30);
    }

    #[test]
    fn with_counters_clamps_confidence() {
        let session = TrainingSession::new(TrainingConfig::default()).with_counters(3, 120);
        assert_eq!(session.confidence(), 95);
        assert_eq!(session.sample_count(), 3);
    }

    #[test]
    fn recordings_keep_insertion_order() {
        let mut session = TrainingSession::new(TrainingConfig::default());
        session.ingest(batch(&["1:00"], 10));
        session.ingest(batch(&["2:00"], 10));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.recordings[1].duration().to_string(), "2:00");
        assert!(snapshot.is_latest(snapshot.recordings[1].id()));
        assert!(!snapshot.is_latest(snapshot.recordings[0].id()));
    }
}
