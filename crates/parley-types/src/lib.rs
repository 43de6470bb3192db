//! Shared types for the Parley operator console.
//!
//! This crate holds the domain vocabulary used by every other Parley crate:
//! the training workflow status, recording provenance, the typed `M:SS`
//! clip duration, and the normalized `Recording` entity together with the
//! collaborator payloads (`FileMeta`, `CallResult`) that ingestion adapters
//! turn into recordings.
//!
//! Nothing here has behaviour beyond parsing and formatting; the training
//! engine itself lives in `parley-training`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod duration;
mod recording;

pub use duration::{ClipDuration, DurationParseError};
pub use recording::{CallResult, FileMeta, Recording, RecordingId};

/// Status of an agent's voice-training workflow.
///
/// `Completed` is not terminal: removing recordings can move a session
/// back to `InProgress`. Nothing moves a session back to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingStatus {
    /// No recording has been ingested yet.
    #[default]
    NotStarted,
    /// At least one ingestion happened, target not reached (or lost).
    InProgress,
    /// Cumulative recorded minutes reached the target.
    Completed,
}

impl TrainingStatus {
    /// Returns the canonical wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the operator-facing badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Не начато",
            Self::InProgress => "В процессе",
            Self::Completed => "Завершено",
        }
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown training status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown training status: {0}")]
pub struct ParseStatusError(pub String);

/// Provenance of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingKind {
    /// A recorded customer call (uploaded call audio).
    Call,
    /// A role-play session held through the call subsystem.
    Roleplay,
}

impl RecordingKind {
    /// Returns the canonical wire string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Roleplay => "roleplay",
        }
    }
}

impl fmt::Display for RecordingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the agent a training session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
