//! Error types for LLM operations

use thiserror::Error;

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while talking to an LLM provider
#[derive(Error, Debug)]
pub enum LlmError {
    /// API request failed with an unexpected status
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid API key or authentication failed
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body did not match the provider's documented shape
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Provider could not be constructed from the given settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
