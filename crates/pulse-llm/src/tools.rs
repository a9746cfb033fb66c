//! Tool definition types for LLM tool use

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition advertised to the provider
///
/// Describes a tool the model may call: its name, a description the model
/// reads to decide when to call it, and a JSON Schema for its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match the tool in the agent's registry)
    pub name: String,

    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helpers to build JSON schemas for tools
pub mod schema {
    use serde_json::{Value, json};

    /// Schema for a tool that takes no input
    ///
    /// ```
    /// use pulse_llm::tools::schema;
    ///
    /// let schema = schema::empty_object();
    /// assert_eq!(schema["type"], "object");
    /// assert!(schema.get("required").is_none());
    /// ```
    pub fn empty_object() -> Value {
        json!({
            "type": "object",
            "properties": {},
        })
    }
}
