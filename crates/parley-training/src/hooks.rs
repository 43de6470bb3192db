//! Outbound notifications of the training engine.
//!
//! The controller calls a [`TrainingObserver`] after every applied
//! mutation. All methods default to no-ops, so an observer only implements
//! what it cares about. Observers compose as tuples: `(A, B)` forwards every
//! call to `A` and then `B`.

use parley_observe::{EventLog, EventPayload};
use parley_types::{AgentId, Recording};
use tracing::info;

use crate::plural::{format_count, RECORDING_FORMS};
use crate::snapshot::TrainingSnapshot;

pub trait TrainingObserver {
    /// The session left `not-started`.
    fn on_started(&mut self) {}

    /// Total minutes reached the target.
    fn on_completed(&mut self, _total_minutes: f64) {}

    /// A removal dropped a completed session back to in-progress.
    fn on_reverted(&mut self, _total_minutes: f64) {}

    fn on_ingested(&mut self, _added: &[Recording], _total_minutes: f64) {}

    fn on_removed(&mut self, _removed: &Recording, _total_minutes: f64) {}

    /// Called last, after every mutation.
    fn on_snapshot(&mut self, _snapshot: &TrainingSnapshot) {}
}

/// Ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {}

impl<A: TrainingObserver, B: TrainingObserver> TrainingObserver for (A, B) {
    fn on_started(&mut self) {
        self.0.on_started();
        self.1.on_started();
    }

    fn on_completed(&mut self, total_minutes: f64) {
        self.0.on_completed(total_minutes);
        self.1.on_completed(total_minutes);
    }

    fn on_reverted(&mut self, total_minutes: f64) {
        self.0.on_reverted(total_minutes);
        self.1.on_reverted(total_minutes);
    }

    fn on_ingested(&mut self, added: &[Recording], total_minutes: f64) {
        self.0.on_ingested(added, total_minutes);
        self.1.on_ingested(added, total_minutes);
    }

    fn on_removed(&mut self, removed: &Recording, total_minutes: f64) {
        self.0.on_removed(removed, total_minutes);
        self.1.on_removed(removed, total_minutes);
    }

    fn on_snapshot(&mut self, snapshot: &TrainingSnapshot) {
        self.0.on_snapshot(snapshot);
        self.1.on_snapshot(snapshot);
    }
}

/// Emits structured `tracing` events for lifecycle notifications.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    agent_id: AgentId,
}

impl TracingObserver {
    pub fn new(agent_id: AgentId) -> Self {
        Self { agent_id }
    }
}

impl TrainingObserver for TracingObserver {
    fn on_started(&mut self) {
        info!(agent = %self.agent_id, "voice training started");
    }

    fn on_completed(&mut self, total_minutes: f64) {
        info!(agent = %self.agent_id, total_minutes, "voice training completed");
    }

    fn on_reverted(&mut self, total_minutes: f64) {
        info!(
            agent = %self.agent_id,
            total_minutes,
            "voice training fell below target"
        );
    }

    fn on_ingested(&mut self, added: &[Recording], total_minutes: f64) {
        info!(
            agent = %self.agent_id,
            added = %format_count(added.len() as u64, &RECORDING_FORMS),
            total_minutes,
            "training recordings added"
        );
    }

    fn on_removed(&mut self, removed: &Recording, total_minutes: f64) {
        info!(
            agent = %self.agent_id,
            recording = %removed.id(),
            total_minutes,
            "training recording removed"
        );
    }
}

/// Records lifecycle notifications in an [`EventLog`].
#[derive(Debug)]
pub struct EventLogObserver {
    agent_id: AgentId,
    log: EventLog,
}

impl EventLogObserver {
    pub fn new(agent_id: AgentId) -> Self {
        Self::with_log(agent_id, EventLog::new())
    }

    /// Records into an existing log, e.g. one built with a retention cap.
    pub fn with_log(agent_id: AgentId, log: EventLog) -> Self {
        Self { agent_id, log }
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn into_log(self) -> EventLog {
        self.log
    }

    fn emit(&mut self, payload: EventPayload) {
        self.log.emit(self.agent_id.as_str(), payload);
    }
}

impl TrainingObserver for EventLogObserver {
    fn on_started(&mut self) {
        self.emit(EventPayload::TrainingStarted);
    }

    fn on_completed(&mut self, total_minutes: f64) {
        self.emit(EventPayload::TrainingCompleted { total_minutes });
    }

    fn on_reverted(&mut self, total_minutes: f64) {
        self.emit(EventPayload::TrainingReverted { total_minutes });
    }

    fn on_ingested(&mut self, added: &[Recording], total_minutes: f64) {
        self.emit(EventPayload::RecordingsIngested {
            count: added.len(),
            label: format_count(added.len() as u64, &RECORDING_FORMS),
            total_minutes,
        });
    }

    fn on_removed(&mut self, removed: &Recording, total_minutes: f64) {
        self.emit(EventPayload::RecordingRemoved {
            recording_id: removed.id().to_string(),
            total_minutes,
        });
    }
}
