//! LLM provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for LLM providers
///
/// The agent loop only ever asks a provider for one completion at a time;
/// conversation state lives in the request.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for the given conversation
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Provider name (e.g., "anthropic")
    fn name(&self) -> &str;
}
