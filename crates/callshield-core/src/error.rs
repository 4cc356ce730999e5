//! Error types for CallShield Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed input: empty keyword, out-of-range risk level, bad phone number
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u64 },

    /// Entity collides with an existing one (duplicate keyword or number)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected failure inside a store or the engine
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    /// Shorthand for a missing entity
    pub fn not_found(kind: &'static str, id: u64) -> Self {
        CoreError::NotFound { kind, id }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
