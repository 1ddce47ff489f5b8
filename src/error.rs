//! Error types shared by the workplace simulation.

use thiserror::Error;

use crate::workplace::types::EmployeeId;

/// Errors raised while generating, applying or narrating workplace events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkplaceError {
    /// No employee satisfies the preconditions of the requested event
    #[error("no eligible participant for {event}")]
    NoEligibleParticipant { event: &'static str },

    /// Every nickname in the pool is already taken
    #[error("nickname pool exhausted ({pool} nicknames, all in use)")]
    NicknamesExhausted { pool: usize },

    /// The same person was passed as both speaker and listener
    #[error("speaker and listener must be different people")]
    SpeakerIsListener,

    /// The id does not belong to a current or former employee
    #[error("unknown employee {0}")]
    UnknownEmployee(EmployeeId),
}

/// Errors raised while loading or validating company parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, WorkplaceError>;
