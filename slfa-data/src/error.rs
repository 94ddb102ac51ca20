use thiserror::Error;

use crate::players::PlayerId;

/// Errors raised while building a roster
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Duplicate player id: {0}")]
    DuplicateId(PlayerId),

    #[error("Player {0} has an invalid jersey number (must be positive)")]
    InvalidJerseyNumber(PlayerId),

    #[error("Roster JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by the lookup-by-id accessors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No player with id '{0}'")]
    PlayerNotFound(String),

    #[error("Player '{0}' has no agent on record")]
    AgentUnavailable(String),
}
