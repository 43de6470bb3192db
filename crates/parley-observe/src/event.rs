//! Event domain, payload, and record types for the training event log.

use serde::{Deserialize, Serialize};

/// Training event domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventDomain {
    /// Workflow status changes of a training session.
    #[serde(rename = "SESSION")]
    Session,
    /// Recordings entering or leaving a session.
    #[serde(rename = "RECORDING")]
    Recording,
}

impl EventDomain {
    /// Returns the canonical string label for this domain.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Session => "SESSION",
            Self::Recording => "RECORDING",
        }
    }
}

impl std::fmt::Display for EventDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventDomain {
    type Err = ParseEventDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SESSION" => Ok(Self::Session),
            "RECORDING" => Ok(Self::Recording),
            _ => Err(ParseEventDomainError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown event domain string.
#[derive(Debug, Clone)]
pub struct ParseEventDomainError(pub String);

impl std::fmt::Display for ParseEventDomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown event domain: {}", self.0)
    }
}

impl std::error::Error for ParseEventDomainError {}

/// Structured event payloads for each event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ── Session domain ───────────────────────────────────────────────
    /// The first recording arrived; the session left `not-started`.
    TrainingStarted,

    /// Cumulative minutes reached the target.
    TrainingCompleted {
        /// Total recorded minutes at the moment of completion.
        total_minutes: f64,
    },

    /// A removal dropped a completed session below the target.
    TrainingReverted {
        /// Total recorded minutes after the removal.
        total_minutes: f64,
    },

    // ── Recording domain ─────────────────────────────────────────────
    /// One ingestion (an upload batch or a finished call) was applied.
    RecordingsIngested {
        /// Number of recordings added.
        count: usize,
        /// Pluralised human label, e.g. `3 аудиозаписи`.
        label: String,
        /// Total recorded minutes after the ingestion.
        total_minutes: f64,
    },

    /// A recording was removed from the session.
    RecordingRemoved {
        /// The removed recording's id.
        recording_id: String,
        /// Total recorded minutes after the removal.
        total_minutes: f64,
    },
}

impl EventPayload {
    /// Returns the canonical event type string for this payload.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TrainingStarted => "TRAINING_STARTED",
            Self::TrainingCompleted { .. } => "TRAINING_COMPLETED",
            Self::TrainingReverted { .. } => "TRAINING_REVERTED",
            Self::RecordingsIngested { .. } => "RECORDINGS_INGESTED",
            Self::RecordingRemoved { .. } => "RECORDING_REMOVED",
        }
    }

    /// Returns the entity type this payload is about.
    pub fn entity_type(&self) -> &'static str {
        match self {
            Self::TrainingStarted
            | Self::TrainingCompleted { .. }
            | Self::TrainingReverted { .. } => "session",
            Self::RecordingsIngested { .. } | Self::RecordingRemoved { .. } => "recording",
        }
    }

    /// Returns the domain for this payload.
    pub fn domain(&self) -> EventDomain {
        match self {
            Self::TrainingStarted
            | Self::TrainingCompleted { .. }
            | Self::TrainingReverted { .. } => EventDomain::Session,
            Self::RecordingsIngested { .. } | Self::RecordingRemoved { .. } => {
                EventDomain::Recording
            }
        }
    }
}

/// A single entry of the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicEvent {
    /// Monotonically increasing sequence number within the log, from 1.
    pub seq: u64,
    /// The event domain.
    pub domain: EventDomain,
    /// The specific event type (e.g., `TRAINING_STARTED`).
    pub event_type: String,
    /// The type of entity involved (`session` or `recording`).
    pub entity_type: String,
    /// The agent whose session produced the event.
    pub entity_id: String,
    /// The structured event payload.
    pub payload: EventPayload,
    /// RFC 3339 timestamp of when the event was recorded.
    pub occurred_at: String,
}
