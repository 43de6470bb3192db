//! Training event log for the Parley console.
//!
//! Records the outbound notifications of the training engine in an
//! append-only, in-memory log that the view layer can query. Every session
//! start, completion, reversion, ingestion and removal becomes one
//! [`PublicEvent`] with a per-log sequence number.
//!
//! # Event domains
//!
//! | Domain | Example events |
//! |--------|---------------|
//! | `SESSION` | `TRAINING_STARTED`, `TRAINING_COMPLETED`, `TRAINING_REVERTED` |
//! | `RECORDING` | `RECORDINGS_INGESTED`, `RECORDING_REMOVED` |
//!
//! # Usage
//!
//! ```rust
//! use parley_observe::{EventFilter, EventLog, EventPayload};
//!
//! let mut log = EventLog::new();
//! log.emit("agent-1", EventPayload::TrainingStarted);
//! assert_eq!(log.query(&EventFilter::default()).len(), 1);
//! ```

mod error;
mod event;
mod store;

pub use error::ObserveError;
pub use event::{EventDomain, EventPayload, ParseEventDomainError, PublicEvent};
pub use store::{EventFilter, EventLog};
