//! SDK error types

use callshield_core::CoreError;
use callshield_runtime::RuntimeError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Malformed input; the message is safe to show to the caller
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Duplicate keyword or number
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Seed data could not be applied
    #[error("Seed error: {0}")]
    Seed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Unexpected failure inside the engine
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SdkError {
    /// Message without the variant prefix, for response bodies
    pub fn detail(&self) -> String {
        match self {
            SdkError::Validation(msg)
            | SdkError::NotFound(msg)
            | SdkError::Conflict(msg)
            | SdkError::ConfigError(msg)
            | SdkError::Seed(msg)
            | SdkError::Internal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<RuntimeError> for SdkError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Core(CoreError::Validation(msg)) => SdkError::Validation(msg),
            RuntimeError::Core(err @ CoreError::NotFound { .. }) => {
                SdkError::NotFound(err.to_string())
            }
            RuntimeError::Core(CoreError::Conflict(msg)) => SdkError::Conflict(msg),
            RuntimeError::Core(CoreError::Internal(msg)) => SdkError::Internal(msg),
            other => SdkError::Internal(other.to_string()),
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
