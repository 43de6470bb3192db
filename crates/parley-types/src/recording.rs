//! The normalized recording entity and the collaborator payloads it is
//! built from.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::{ClipDuration, RecordingKind};

/// Short Russian month names as used in operator-facing dates.
const RU_SHORT_MONTHS: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

/// Unique identifier of a recording within a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordingId(Uuid);

impl RecordingId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One captured audio sample.
///
/// Recordings are created by an ingestion adapter and never mutated
/// afterwards; removal from a session is the only way they go away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    id: RecordingId,
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    duration: ClipDuration,
    kind: RecordingKind,
}

impl Recording {
    /// Creates a recording with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        captured_at: NaiveDateTime,
        duration: ClipDuration,
        kind: RecordingKind,
    ) -> Self {
        Self {
            id: RecordingId::new(),
            title: title.into(),
            date: captured_at.date(),
            time: captured_at.time(),
            duration,
            kind,
        }
    }

    pub fn id(&self) -> RecordingId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn duration(&self) -> ClipDuration {
        self.duration
    }

    pub fn kind(&self) -> RecordingKind {
        self.kind
    }

    /// Short Russian date, e.g. `17 окт. 2026 г.`.
    pub fn date_label(&self) -> String {
        let month = RU_SHORT_MONTHS[self.date.month0() as usize];
        format!("{} {} {} г.", self.date.day(), month, self.date.year())
    }

    /// 24-hour `HH:MM` time.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Metadata of one file chosen in the file picker. Content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// What the call subsystem reports when a call session hangs up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResult {
    /// Measured call length.
    pub duration: ClipDuration,
    pub title: String,
    /// Local time the call ended.
    pub timestamp: NaiveDateTime,
}
