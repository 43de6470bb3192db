//! Inbound boundary of the training engine.
//!
//! The view layer talks to a [`TrainingController`]: it starts or resumes
//! a session, hands over finished uploads and calls, and asks for
//! removals. Each call applies one complete mutation and then notifies the
//! observer, ending with a fresh snapshot.

use chrono::{Local, NaiveDateTime};
use parley_types::{AgentId, CallResult, FileMeta, Recording, RecordingId, TrainingStatus};
use tracing::debug;

use crate::config::TrainingConfig;
use crate::error::TrainingError;
use crate::hooks::{NoopObserver, TrainingObserver};
use crate::ingest::{
    CallAdapter, DurationSource, IngestBatch, IngestContext, IngestionAdapter, RandomDurations,
    UploadAdapter,
};
use crate::session::TrainingSession;
use crate::snapshot::TrainingSnapshot;
use crate::state::Signal;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[derive(Debug)]
pub struct TrainingController<D = RandomDurations, O = NoopObserver> {
    agent_id: AgentId,
    session: TrainingSession,
    uploads: UploadAdapter<D>,
    calls: CallAdapter,
    observer: O,
    clock: fn() -> NaiveDateTime,
}

impl<D: DurationSource, O: TrainingObserver> TrainingController<D, O> {
    /// Creates a controller with an empty, not-started session.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::InvalidConfig` if `config` fails validation.
    pub fn new(
        agent_id: AgentId,
        config: TrainingConfig,
        durations: D,
        observer: O,
    ) -> Result<Self, TrainingError> {
        config.validate()?;
        let uploads = UploadAdapter::new(
            durations,
            config.upload_title_prefix.clone(),
            config.upload_confidence_delta,
        );
        let calls = CallAdapter::new(config.call_confidence_delta);
        Ok(Self {
            agent_id,
            session: TrainingSession::new(config),
            uploads,
            calls,
            observer,
            clock: local_now,
        })
    }

    /// Replaces the clock used to stamp uploaded recordings.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn snapshot(&self) -> TrainingSnapshot {
        self.session.snapshot()
    }

    /// Starts (or resumes) the session with the given status and recordings,
    /// discarding the current one.
    pub fn start_session(
        &mut self,
        status: TrainingStatus,
        recordings: Vec<Recording>,
    ) -> TrainingSnapshot {
        let config = self.session.config().clone();
        self.restore(TrainingSession::resume(config, status, recordings))
    }

    /// Replaces the current session with a fully resumed one, including its
    /// counters.
    pub fn restore(&mut self, session: TrainingSession) -> TrainingSnapshot {
        self.session = session;
        debug!(
            agent = %self.agent_id,
            status = %self.session.status(),
            recordings = self.session.recordings().len(),
            "training session started"
        );
        let snapshot = self.session.snapshot();
        self.observer.on_snapshot(&snapshot);
        snapshot
    }

    /// Ingests a finished upload batch. An empty batch is ignored.
    pub fn ingest_upload(&mut self, files: &[FileMeta]) -> Vec<Recording> {
        if files.is_empty() {
            debug!(agent = %self.agent_id, "ignored empty upload batch");
            return Vec::new();
        }
        let ctx = self.context();
        let batch = self.uploads.normalize(files.to_vec(), &ctx);
        self.apply_batch(batch)
    }

    /// Ingests the recording of a finished call and returns it.
    pub fn ingest_call(&mut self, call: CallResult) -> Option<Recording> {
        let ctx = self.context();
        let batch = self.calls.normalize(call, &ctx);
        self.apply_batch(batch).pop()
    }

    /// Removes a recording. Unknown ids are ignored and notify nobody.
    pub fn remove_recording(&mut self, id: RecordingId) -> Option<Recording> {
        let Some((removed, transition)) = self.session.remove(id) else {
            debug!(agent = %self.agent_id, %id, "ignored removal of unknown recording");
            return None;
        };

        let total_minutes = self.session.total_minutes();
        self.observer.on_removed(&removed, total_minutes);
        if transition.has(Signal::Reverted) {
            self.observer.on_reverted(total_minutes);
        }
        let snapshot = self.session.snapshot();
        self.observer.on_snapshot(&snapshot);
        Some(removed)
    }

    fn apply_batch(&mut self, batch: IngestBatch) -> Vec<Recording> {
        let added = batch.recordings.clone();
        let transition = self.session.ingest(batch);
        let total_minutes = self.session.total_minutes();

        if transition.has(Signal::Started) {
            self.observer.on_started();
        }
        self.observer.on_ingested(&added, total_minutes);
        if transition.has(Signal::Completed) {
            self.observer.on_completed(total_minutes);
        }
        let snapshot = self.session.snapshot();
        self.observer.on_snapshot(&snapshot);
        added
    }

    fn context(&self) -> IngestContext {
        IngestContext {
            existing_count: self.session.recordings().len(),
            now: (self.clock)(),
        }
    }
}
