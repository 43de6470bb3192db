//! Console configuration loading from file and environment variables.

use parley_training::{TrainingConfig, TrainingError};
use parley_types::TrainingStatus;
use serde::Deserialize;
use thiserror::Error;

/// Top-level console configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Training engine tunables.
    #[serde(default)]
    pub training: TrainingConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// The session the console opens on startup.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "parley_training=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_agent_id")]
    pub agent_id: String,

    /// Status to resume with, e.g. `"in-progress"`.
    #[serde(default)]
    pub initial_status: TrainingStatus,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_agent_id() -> String {
    "agent-1".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            agent_id: default_agent_id(),
            initial_status: TrainingStatus::default(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The `[training]` section describes an unreachable target.
    #[error(transparent)]
    Training(#[from] TrainingError),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `PARLEY_LOG_LEVEL` overrides `logging.level`
/// - `PARLEY_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `PARLEY_TARGET_MINUTES` overrides `training.target_minutes`
/// - `PARLEY_AGENT_ID` overrides `session.agent_id`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed,
/// or if the resulting training configuration is invalid.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    if let Ok(level) = std::env::var("PARLEY_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("PARLEY_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Ok(target) = std::env::var("PARLEY_TARGET_MINUTES") {
        match target.parse() {
            Ok(parsed) => config.training.target_minutes = parsed,
            Err(_) => tracing::warn!(value = %target, "ignoring unparseable PARLEY_TARGET_MINUTES"),
        }
    }
    if let Ok(agent_id) = std::env::var("PARLEY_AGENT_ID") {
        if !agent_id.trim().is_empty() {
            config.session.agent_id = agent_id;
        }
    }

    config.training.validate()?;
    Ok(config)
}
