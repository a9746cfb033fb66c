//! Error types for pulse-agent

use thiserror::Error;

/// Result type alias for pulse-agent
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent and tool operations
#[derive(Error, Debug)]
pub enum Error {
    /// The provider call failed
    #[error("LLM request failed: {0}")]
    Llm(#[from] pulse_llm::LlmError),

    /// The model kept requesting tools past the configured limit
    #[error("agent did not finish within {0} iterations")]
    IterationLimit(usize),

    /// A tool failed while executing
    #[error("tool {tool} failed: {reason}")]
    ToolFailed { tool: String, reason: String },
}
