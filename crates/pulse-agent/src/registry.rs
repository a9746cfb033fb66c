//! Tool registry

use crate::Tool;
use pulse_llm::ToolDefinition;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Set of tools available to one agent, keyed by name
///
/// Iteration is name-ordered so the tool list sent to the provider is stable
/// across runs.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Definitions for every registered tool
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct Named(&'static str);

    #[async_trait]
    impl Tool for Named {
        async fn execute(&self, _params: Value) -> crate::Result<Value> {
            Ok(json!(self.0))
        }

        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test tool"
        }

        fn input_schema(&self) -> Value {
            pulse_llm::tools::schema::empty_object()
        }
    }

    #[test]
    fn test_definitions_are_name_ordered() {
        let registry = ToolRegistry::new()
            .with_tool(Arc::new(Named("zeta")))
            .with_tool(Arc::new(Named("alpha")));

        let names: Vec<_> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ToolRegistry::new();
        assert!(registry.definitions().is_empty());

        registry.register(Arc::new(Named("quote")));
        registry.register(Arc::new(Named("quote")));

        assert_eq!(registry.definitions().len(), 1);
        assert!(registry.get("quote").is_some());
        assert!(registry.get("missing").is_none());
    }
}
