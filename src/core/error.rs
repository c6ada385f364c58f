//! Custom error types for cloudpilot
//!
//! Provides a unified error handling system across both tools.

use thiserror::Error;

/// Main error type for cloudpilot operations
#[derive(Error, Debug)]
pub enum CloudpilotError {
    /// Azure CLI invocation errors (spawn failures, non-zero exits)
    #[error("az error: {0}")]
    Az(String),

    /// External command exceeded its wall-clock bound
    #[error("Command timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Browser automation errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Target address could not be parsed
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Azure CLI not installed
    #[error("az not found. Install the Azure CLI: https://aka.ms/installazurecli")]
    AzNotFound,

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for cloudpilot operations
pub type Result<T> = std::result::Result<T, CloudpilotError>;

impl CloudpilotError {
    /// Create an Azure CLI error
    pub fn az(msg: impl Into<String>) -> Self {
        Self::Az(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
