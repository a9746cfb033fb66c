//! Agent executor
//!
//! The executor implements the tool-use loop:
//! 1. Call the LLM with the conversation and the registered tools
//! 2. If the model asked for tools, run them, append the results, loop back
//! 3. Otherwise return the assistant's text

use crate::{Error, Result, ToolRegistry};
use pulse_llm::{CompletionRequest, ContentBlock, LlmProvider, Message, StopReason};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Configuration for agent execution
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum number of LLM calls per run (prevents infinite tool loops)
    pub max_iterations: usize,

    pub model: String,

    pub system_prompt: Option<String>,

    /// Max tokens per completion
    pub max_tokens: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            model: "claude-sonnet-4-5".to_string(),
            system_prompt: None,
            max_tokens: 1024,
        }
    }
}

/// Runs the LLM → tool calls → LLM loop for a single prompt
pub struct AgentExecutor {
    provider: Arc<dyn LlmProvider>,
    tools: ToolRegistry,
    config: ExecutorConfig,
}

impl AgentExecutor {
    pub fn new(provider: Arc<dyn LlmProvider>, tools: ToolRegistry, config: ExecutorConfig) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run the loop for one user prompt and return the model's final text
    ///
    /// The returned text may be empty; deciding whether that is acceptable is
    /// left to the caller.
    pub async fn run(&self, prompt: impl Into<String>) -> Result<String> {
        let mut conversation = vec![Message::user(prompt)];
        let tools = self.tools.definitions();

        for iteration in 1..=self.config.max_iterations {
            info!(
                iteration,
                max_iterations = self.config.max_iterations,
                model = %self.config.model,
                tool_count = tools.len(),
                "Sending request to LLM"
            );

            let request =
                CompletionRequest::new(&self.config.model, conversation.clone(), self.config.max_tokens)
                    .with_system(self.config.system_prompt.clone())
                    .with_tools(tools.clone());

            let response = self.provider.complete(request).await?;

            info!(
                stop_reason = ?response.stop_reason,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                total_tokens = response.usage.total(),
                "LLM response received"
            );

            match response.stop_reason {
                StopReason::ToolUse if response.message.has_tool_uses() => {
                    let results = self.execute_tools(&response.message).await;
                    conversation.push(response.message);
                    conversation.push(Message::tool_results(results));
                }
                StopReason::ToolUse => {
                    warn!("Tool use stop reason without tool_use blocks, treating as final");
                    return Ok(response.message.text());
                }
                StopReason::MaxTokens => {
                    warn!("Hit max tokens in LLM response, returning truncated text");
                    return Ok(response.message.text());
                }
                StopReason::EndTurn | StopReason::StopSequence => {
                    let text = response.message.text();
                    info!(iteration, response_length = text.len(), "Agent completed");
                    return Ok(text);
                }
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            "Max iterations reached without completion"
        );
        Err(Error::IterationLimit(self.config.max_iterations))
    }

    /// Run every tool the assistant asked for, in order
    ///
    /// Failures are reported back to the model as error results rather than
    /// aborting the run.
    async fn execute_tools(&self, message: &Message) -> Vec<ContentBlock> {
        let mut results = Vec::new();

        for block in message.tool_uses() {
            let ContentBlock::ToolUse { id, name, input } = block else {
                continue;
            };

            let Some(tool) = self.tools.get(name) else {
                warn!(tool_name = %name, "Model requested an unknown tool");
                results.push(ContentBlock::tool_error(id, format!("Tool not found: {name}")));
                continue;
            };

            info!(tool_name = %name, tool_id = %id, "Executing tool");
            let started = Instant::now();

            let outcome = tool
                .execute(input.clone())
                .await
                .and_then(|value| {
                    serde_json::to_string(&value).map_err(|e| Error::ToolFailed {
                        tool: name.clone(),
                        reason: e.to_string(),
                    })
                });
            let duration_ms = started.elapsed().as_millis() as u64;

            match outcome {
                Ok(text) => {
                    debug!(tool_name = %name, duration_ms, result = %text, "Tool execution succeeded");
                    results.push(ContentBlock::tool_result(id, text));
                }
                Err(e) => {
                    warn!(tool_name = %name, duration_ms, error = %e, "Tool execution failed");
                    results.push(ContentBlock::tool_error(id, format!("Error: {e}")));
                }
            }
        }

        results
    }
}
