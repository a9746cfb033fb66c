//! LLM provider abstraction layer for market-pulse
//!
//! This crate holds the provider-agnostic pieces the agent loop talks to:
//!
//! - Message and content-block types (text, tool use, tool result)
//! - Completion request/response types
//! - Tool definitions advertised to the model
//! - The [`LlmProvider`] trait and the Anthropic implementation

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod tools;

pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LlmError, Result};
pub use messages::{ContentBlock, Message, MessageContent, Role};
pub use provider::LlmProvider;
pub use tools::ToolDefinition;

#[cfg(feature = "anthropic")]
pub mod providers;
