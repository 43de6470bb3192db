//! Drives one agent's training session from parsed commands.

use chrono::{Local, NaiveDateTime};
use parley_observe::{EventFilter, EventLog};
use parley_training::{
    DurationSource, EventLogObserver, TracingObserver, TrainingController, TrainingError,
    TrainingSnapshot,
};
use parley_types::{AgentId, CallResult};

use crate::command::{Command, CommandError};
use crate::config::Config;

/// Events kept in memory by a console session; older ones are dropped.
pub const EVENT_LOG_RETENTION: usize = 1000;

/// Title given to a call recorded without one.
pub const DEFAULT_CALL_TITLE: &str = "Сессия ролевой игры";

type Observers = (TracingObserver, EventLogObserver);

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Print this text and keep reading.
    Print(String),
    Quit,
}

#[derive(Debug)]
pub struct Console<D> {
    controller: TrainingController<D, Observers>,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<D: DurationSource> Console<D> {
    /// Opens the session described by `config.session`.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::InvalidConfig` if `config.training` is invalid.
    pub fn new(config: &Config, durations: D) -> Result<Self, TrainingError> {
        let agent_id = AgentId::new(config.session.agent_id.clone());
        let observers = (
            TracingObserver::new(agent_id.clone()),
            EventLogObserver::with_log(
                agent_id.clone(),
                EventLog::with_retention(EVENT_LOG_RETENTION),
            ),
        );
        let mut controller =
            TrainingController::new(agent_id, config.training.clone(), durations, observers)?;
        controller.start_session(config.session.initial_status, Vec::new());
        Ok(Self {
            controller,
            clock: local_now,
        })
    }

    /// Replaces the clock used to stamp calls and uploads.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.controller = self.controller.with_clock(clock);
        self.clock = clock;
        self
    }

    pub fn snapshot(&self) -> TrainingSnapshot {
        self.controller.snapshot()
    }

    /// Applies one command. Mutations and `status` print the snapshot as
    /// pretty JSON; `events` prints the newest 100 matching log entries,
    /// oldest first.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the output cannot be rendered.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::Upload(files) => {
                self.controller.ingest_upload(&files);
            }
            Command::Call { duration, title } => {
                self.controller.ingest_call(CallResult {
                    duration,
                    title: title.unwrap_or_else(|| DEFAULT_CALL_TITLE.to_string()),
                    timestamp: (self.clock)(),
                });
            }
            Command::Remove(id) => {
                if self.controller.remove_recording(id).is_none() {
                    tracing::warn!(%id, "no such recording");
                }
            }
            Command::Status => {}
            Command::Events(domain) => {
                let filter = EventFilter {
                    domain,
                    ..EventFilter::default()
                };
                let events = self.controller.observer().1.log().latest(&filter);
                return Ok(Outcome::Print(serde_json::to_string_pretty(&events)?));
            }
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Print(render(&self.controller.snapshot())?))
    }
}

/// Renders a snapshot as pretty JSON.
///
/// # Errors
///
/// Returns `CommandError::Render` if serialisation fails.
pub fn render(snapshot: &TrainingSnapshot) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
