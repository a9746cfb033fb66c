//! Completion request and response types

use crate::{Message, ToolDefinition};
use serde::{Deserialize, Serialize};

/// One round-trip to the model: the whole conversation so far plus the tools
/// it may call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier (provider-specific)
    pub model: String,

    /// Conversation history, oldest first; starts with a user turn
    pub messages: Vec<Message>,

    /// System prompt; omitted from the wire when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Upper bound on generated tokens for this turn
    pub max_tokens: usize,

    /// Tools the model may call; omitted from the wire when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>, max_tokens: usize) -> Self {
        Self {
            model: model.into(),
            messages,
            system: None,
            max_tokens,
            tools: None,
        }
    }

    /// Attach a system prompt; `None` or a blank string leaves it unset
    pub fn with_system(mut self, system: Option<String>) -> Self {
        self.system = system.filter(|s| !s.trim().is_empty());
        self
    }

    /// Advertise tools; an empty list leaves them unset
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = (!tools.is_empty()).then_some(tools);
        self
    }
}

/// What the model sent back for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Assistant turn; may mix text and tool_use blocks
    pub message: Message,

    /// Why generation stopped; drives the agent loop
    pub stop_reason: StopReason,

    /// Token accounting reported by the provider
    pub usage: TokenUsage,
}

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The model finished its answer
    EndTurn,

    /// Output was cut at `max_tokens`
    MaxTokens,

    /// A configured stop sequence was produced
    StopSequence,

    /// The model is waiting on tool results
    ToolUse,
}

/// Token usage for one completion
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt tokens, including tool definitions and prior turns
    pub input_tokens: usize,

    /// Generated tokens
    pub output_tokens: usize,
}

impl TokenUsage {
    pub fn total(&self) -> usize {
        self.input_tokens + self.output_tokens
    }
}
