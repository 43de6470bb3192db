//! Voice-training progress engine for the Parley console.
//!
//! Tracks how much recorded audio an agent has collected for voice
//! training and drives the `not-started -> in-progress -> completed`
//! workflow. Recordings arrive through two ingestion adapters (file
//! uploads and finished call sessions), are summed into total minutes,
//! and compared against a fixed target. Removing recordings can move a
//! completed session back to in-progress.
//!
//! The engine is synchronous and single-owner: every mutation is applied
//! in full by one call, and any I/O (reading files, capturing call audio)
//! happens in the collaborators before a recording reaches the engine.
//!
//! # Layers
//!
//! - [`duration`], [`aggregate`], [`progress`]: pure arithmetic over
//!   recordings.
//! - [`state`]: the status transition function.
//! - [`session`]: the aggregate root owning recordings and counters.
//! - [`ingest`]: adapters that normalise uploads and calls into recordings.
//! - [`hooks`]: outbound notifications.
//! - [`controller`], [`registry`]: the boundary used by the view layer.

pub mod aggregate;
pub mod config;
pub mod controller;
pub mod duration;
pub mod error;
pub mod hooks;
pub mod ingest;
pub mod plural;
pub mod progress;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod state;

pub use config::TrainingConfig;
pub use controller::TrainingController;
pub use error::TrainingError;
pub use hooks::{EventLogObserver, NoopObserver, TracingObserver, TrainingObserver};
pub use ingest::{
    CallAdapter, DurationSource, IngestBatch, IngestContext, IngestionAdapter, RandomDurations,
    ScriptedDurations, UploadAdapter,
};
pub use plural::{format_count, PluralCategory, PluralForms, RECORDING_FORMS};
pub use registry::TrainingRegistry;
pub use session::TrainingSession;
pub use snapshot::TrainingSnapshot;
pub use state::{transition, Signal, StatusEvent, Transition};
