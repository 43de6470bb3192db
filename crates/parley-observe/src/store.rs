//! In-memory storage for the training event log.
//!
//! All writes go through [`EventLog::emit`], which stamps the event with the
//! next sequence number and the current time. Reads go through
//! [`EventLog::query`], which supports filtering by domain, event type,
//! entity and a sequence cursor. [`EventLog::latest`] returns the newest
//! page instead of the oldest.
//!
//! A log built with [`EventLog::with_retention`] keeps only the newest
//! events; sequence numbers keep counting across trimmed entries.

use std::collections::VecDeque;

use chrono::{SecondsFormat, Utc};

use crate::error::ObserveError;
use crate::event::{EventDomain, EventPayload, PublicEvent};

/// Default number of events returned by [`EventLog::query`].
const DEFAULT_QUERY_LIMIT: usize = 100;

/// Filter criteria for querying the event log.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Filter by event domain.
    pub domain: Option<EventDomain>,
    /// Filter by event type string.
    pub event_type: Option<String>,
    /// Filter by entity ID.
    pub entity_id: Option<String>,
    /// Return only events with a sequence number greater than this cursor.
    pub after_seq: Option<u64>,
    /// Maximum number of events to return (default: 100).
    pub limit: Option<usize>,
}

impl EventFilter {
    /// Builds a filter for a domain given by its string label.
    ///
    /// # Errors
    ///
    /// Returns `ObserveError::UnknownDomain` if the label is not a known domain.
    pub fn for_domain(label: &str) -> Result<Self, ObserveError> {
        Ok(Self {
            domain: Some(label.parse()?),
            ..Self::default()
        })
    }

    fn matches(&self, event: &PublicEvent) -> bool {
        if let Some(domain) = self.domain {
            if event.domain != domain {
                return false;
            }
        }
        if let Some(ref et) = self.event_type {
            if &event.event_type != et {
                return false;
            }
        }
        if let Some(ref id) = self.entity_id {
            if &event.entity_id != id {
                return false;
            }
        }
        if let Some(after) = self.after_seq {
            if event.seq <= after {
                return false;
            }
        }
        true
    }
}

/// Append-only, in-memory event log.
#[derive(Debug)]
pub struct EventLog {
    events: VecDeque<PublicEvent>,
    next_seq: u64,
    retention: Option<usize>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self {
            events: VecDeque::new(),
            next_seq: 1,
            retention: None,
        }
    }
}

impl EventLog {
    /// Creates an unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log that keeps at most `max_events` (at least one) of the
    /// newest events.
    pub fn with_retention(max_events: usize) -> Self {
        Self {
            retention: Some(max_events.max(1)),
            ..Self::default()
        }
    }

    pub fn retention(&self) -> Option<usize> {
        self.retention
    }

    /// Appends one event and returns the stored record.
    pub fn emit(&mut self, entity_id: &str, payload: EventPayload) -> &PublicEvent {
        let seq = self.next_seq;
        self.next_seq += 1;
        let event = PublicEvent {
            seq,
            domain: payload.domain(),
            event_type: payload.event_type().to_string(),
            entity_type: payload.entity_type().to_string(),
            entity_id: entity_id.to_string(),
            payload,
            occurred_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        tracing::debug!(
            seq,
            event_type = %event.event_type,
            entity_id,
            "recorded training event"
        );
        self.events.push_back(event);
        if let Some(max) = self.retention {
            let excess = self.events.len().saturating_sub(max);
            if excess > 0 {
                self.events.drain(..excess);
                tracing::debug!(dropped = excess, "trimmed training event log");
            }
        }
        &self.events[self.events.len() - 1]
    }

    /// Returns the sequence number the next emitted event will get.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Queries the log, oldest first, bounded by `filter.limit` (default 100).
    pub fn query(&self, filter: &EventFilter) -> Vec<PublicEvent> {
        let limit = filter.limit.unwrap_or(DEFAULT_QUERY_LIMIT);
        self.events
            .iter()
            .filter(|e| filter.matches(e))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Like [`query`](Self::query), but returns the newest `filter.limit`
    /// matches (default 100), still oldest first.
    pub fn latest(&self, filter: &EventFilter) -> Vec<PublicEvent> {
        let limit = filter.limit.unwrap_or(DEFAULT_QUERY_LIMIT);
        let mut events: Vec<PublicEvent> = self
            .events
            .iter()
            .rev()
            .filter(|e| filter.matches(e))
            .take(limit)
            .cloned()
            .collect();
        events.reverse();
        events
    }

    /// Serialises the events matching `filter` as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `ObserveError::Serialization` if serialisation fails.
    pub fn export_json(&self, filter: &EventFilter) -> Result<String, ObserveError> {
        Ok(serde_json::to_string_pretty(&self.query(filter))?)
    }
}
