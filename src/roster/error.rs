//! Error types and handling
//!
//! The generation pipeline itself never fails: malformed configuration
//! degrades to defaults and degenerate populations yield zero statistics.
//! These error types cover the boundary around the pipeline — reading
//! configuration files, writing output, serialization.

use thiserror::Error;

/// Errors that can occur at the roster simulator boundary
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Output could not be produced or written
    #[error("Output error: {0}")]
    OutputError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<String> for RosterError {
    fn from(s: String) -> Self {
        RosterError::OutputError(s)
    }
}

impl From<&str> for RosterError {
    fn from(s: &str) -> Self {
        RosterError::OutputError(s.to_string())
    }
}

impl From<anyhow::Error> for RosterError {
    fn from(error: anyhow::Error) -> Self {
        RosterError::OutputError(error.to_string())
    }
}

impl RosterError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an output error
    pub fn output_error(msg: impl Into<String>) -> Self {
        Self::OutputError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            RosterError::ConfigurationError(_) => "Configuration",
            RosterError::OutputError(_) => "Output",
            RosterError::IoError(_) => "IO",
            RosterError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for roster simulator operations
pub type RosterResult<T> = Result<T, RosterError>;
