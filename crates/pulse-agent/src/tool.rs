//! Tool trait definition

use crate::Result;
use async_trait::async_trait;
use pulse_llm::ToolDefinition;
use serde_json::Value;

/// A function the model may call during the agent loop
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with the model-supplied input
    ///
    /// `params` should match [`Tool::input_schema`]. The returned value is
    /// serialized to JSON text before it is handed back to the model.
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Unique name; the model refers to the tool by it
    fn name(&self) -> &str;

    /// Tells the model when the tool is worth calling
    fn description(&self) -> &str;

    /// JSON Schema for the tool input
    fn input_schema(&self) -> Value;

    /// Definition advertised to the provider
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}
