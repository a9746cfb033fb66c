//! Error types for the market update pipeline

use thiserror::Error;

/// Errors raised while building or delivering a market update
#[derive(Debug, Error)]
pub enum PulseError {
    /// Config file could not be read, parsed, or validated
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A required environment variable is missing or blank
    #[error("{0} not set")]
    MissingEnv(&'static str),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Alpha Vantage returned something other than a usable quote
    #[error("Alpha Vantage error: {0}")]
    AlphaVantageError(String),

    /// Telegram answered with a non-200 status
    #[error("telegram API returned status {status}: {body}")]
    TelegramStatus { status: u16, body: String },

    /// The POST to Telegram never got a response
    #[error("failed to post to Telegram: {0}")]
    TelegramTransport(reqwest::Error),

    /// The agent loop failed
    #[error("Agent generation failed: {0}")]
    AgentError(#[from] pulse_agent::Error),

    /// The model produced no text
    #[error("Agent returned empty message")]
    EmptyMessage,
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PulseError>;
