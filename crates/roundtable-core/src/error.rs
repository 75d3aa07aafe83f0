//! Error types for Roundtable Core
//!
//! Provides a unified error type for all backend operations.

use thiserror::Error;

/// Result type for Roundtable Core operations
pub type Result<T> = std::result::Result<T, RoundtableError>;

/// Unified error type for Roundtable Core
#[derive(Error, Debug)]
pub enum RoundtableError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Backup error
    #[error("Backup error: {0}")]
    Backup(String),
}

impl RoundtableError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        RoundtableError::Config(msg.into())
    }

    /// Create a backup error
    pub fn backup(msg: impl Into<String>) -> Self {
        RoundtableError::Backup(msg.into())
    }
}

impl From<toml::de::Error> for RoundtableError {
    fn from(err: toml::de::Error) -> Self {
        RoundtableError::Config(err.to_string())
    }
}

impl From<crate::llm::LlmError> for RoundtableError {
    fn from(err: crate::llm::LlmError) -> Self {
        RoundtableError::Llm(err.to_string())
    }
}

impl From<crate::config::ConfigError> for RoundtableError {
    fn from(err: crate::config::ConfigError) -> Self {
        RoundtableError::Config(err.to_string())
    }
}
