//! Error types for engine commands.
//!
//! The physics step itself never fails; only commands that take ids from the
//! host and the JSON loaders return `Result<T, EngineError>`.

use std::fmt;

use crate::systems::entity::BodyId;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No body with this id was ever created in the world.
    UnknownBody { id: BodyId },
    /// A body cannot be roped to itself.
    SelfConnection { id: BodyId },
    /// Snapshot JSON could not be parsed.
    InvalidSnapshot(String),
    /// Settings JSON could not be parsed.
    InvalidSettings(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownBody { id } => write!(f, "unknown body id {}", id),
            EngineError::SelfConnection { id } => {
                write!(f, "body {} cannot be connected to itself", id)
            }
            EngineError::InvalidSnapshot(msg) => write!(f, "invalid snapshot: {}", msg),
            EngineError::InvalidSettings(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
