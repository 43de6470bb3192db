//! Training status transitions.
//!
//! All status changes go through [`transition`]. It is a pure function of
//! the current status and the post-mutation totals, so the workflow rules
//! can be tested without a session.
//!
//! | Event | From | To |
//! |---|---|---|
//! | ingested | not-started | in-progress, or completed if the target is reached |
//! | ingested | in-progress | completed if the target is reached |
//! | ingested | completed | completed |
//! | removed | completed | in-progress if below the target |
//! | removed | other | unchanged |

use parley_types::TrainingStatus;

/// A mutation that was just applied to a session, with its resulting totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusEvent {
    /// One or more recordings were added.
    Ingested {
        total_minutes: f64,
        target_minutes: f64,
    },
    /// A recording was removed.
    Removed {
        total_minutes: f64,
        target_minutes: f64,
    },
}

/// Notification raised by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Started,
    Completed,
    Reverted,
}

/// Result of applying a [`StatusEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: TrainingStatus,
    pub to: TrainingStatus,
    /// Signals in the order they happened.
    pub signals: Vec<Signal>,
}

impl Transition {
    /// A transition that changes nothing.
    pub fn unchanged(status: TrainingStatus) -> Self {
        Self {
            from: status,
            to: status,
            signals: Vec::new(),
        }
    }

    pub fn has(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }

    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Computes the next status after `event`.
pub fn transition(from: TrainingStatus, event: StatusEvent) -> Transition {
    let mut signals = Vec::new();
    let to = match event {
        StatusEvent::Ingested {
            total_minutes,
            target_minutes,
        } => {
            let mut status = from;
            if status == TrainingStatus::NotStarted {
                status = TrainingStatus::InProgress;
                signals.push(Signal::Started);
            }
            if status == TrainingStatus::InProgress && total_minutes >= target_minutes {
                status = TrainingStatus::Completed;
                signals.push(Signal::Completed);
            }
            status
        }
        StatusEvent::Removed {
            total_minutes,
            target_minutes,
        } => {
            if from == TrainingStatus::Completed && total_minutes < target_minutes {
                signals.push(Signal::Reverted);
                TrainingStatus::InProgress
            } else {
                from
            }
        }
    };
    Transition { from, to, signals }
}
