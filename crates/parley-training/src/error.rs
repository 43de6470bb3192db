use parley_types::AgentId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TrainingError {
    #[error("Invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("Training session already open for agent: {0}")]
    DuplicateSession(AgentId),
}
