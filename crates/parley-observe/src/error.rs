//! Error types for the training event log.

use crate::event::ParseEventDomainError;

/// Errors that can occur when exporting or filtering events.
#[derive(Debug, thiserror::Error)]
pub enum ObserveError {
    /// JSON serialization failed.
    #[error("observe serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A domain filter named an unknown domain.
    #[error(transparent)]
    UnknownDomain(#[from] ParseEventDomainError),
}
