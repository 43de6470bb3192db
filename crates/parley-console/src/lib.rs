//! Parley console: a line-oriented front end for the voice-training engine.
//!
//! Reads one [`Command`] per line, applies it to a single agent's training
//! session and prints the resulting snapshot as JSON.

pub mod command;
pub mod config;
pub mod console;

pub use command::{Command, CommandError};
pub use config::{load_config, Config, ConfigError};
pub use console::{render, Console, Outcome, DEFAULT_CALL_TITLE, EVENT_LOG_RETENTION};
