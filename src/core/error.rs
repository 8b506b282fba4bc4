//! Custom error types for Delver
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for Delver operations
#[derive(Error, Debug)]
pub enum DelverError {
    /// Chat API connection or protocol errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Tool execution errors
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing API credentials
    #[error("OPENAI_API_KEY is not set. Export it or add it to a .env file.")]
    MissingApiKey,

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for Delver operations
pub type Result<T> = std::result::Result<T, DelverError>;

impl DelverError {
    /// Create an LLM error
    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// Create a tool execution error
    pub fn tool(msg: impl Into<String>) -> Self {
        Self::ToolExecution(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
