//! Tool-using agent loop for market-pulse
//!
//! An [`AgentExecutor`] drives an [`LlmProvider`](pulse_llm::LlmProvider)
//! through the tool-use cycle: ask the model, run whatever tools it
//! requests from the [`ToolRegistry`], feed the results back, repeat until
//! the model produces its final answer.

pub mod error;
pub mod executor;
pub mod registry;
pub mod tool;

pub use error::{Error, Result};
pub use executor::{AgentExecutor, ExecutorConfig};
pub use registry::ToolRegistry;
pub use tool::Tool;
