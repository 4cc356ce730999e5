//! Runtime error types

use callshield_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Domain-level failure (validation, not found, conflict)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Identifier sequence can no longer produce fresh ids
    #[error("Identifier space exhausted for {0}")]
    IdExhausted(&'static str),

    /// Generic runtime error
    #[error("Runtime error: {0}")]
    Internal(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
