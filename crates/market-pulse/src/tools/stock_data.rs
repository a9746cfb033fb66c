//! `get_stock_data` tool exposed to the model

use crate::market::{MarketSnapshot, QuoteSource};
use async_trait::async_trait;
use chrono::Utc;
use pulse_agent::Tool;
use pulse_llm::tools::schema;
use serde_json::Value;
use std::sync::Arc;

pub const TOOL_NAME: &str = "get_stock_data";

/// Returns a fresh [`MarketSnapshot`] every time the model calls it
pub struct StockDataTool {
    source: Arc<dyn QuoteSource>,
    symbols: Vec<String>,
}

impl StockDataTool {
    pub fn new(source: Arc<dyn QuoteSource>, symbols: Vec<String>) -> Self {
        Self { source, symbols }
    }

    pub async fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot::collect(&*self.source, &self.symbols, Utc::now()).await
    }
}

#[async_trait]
impl Tool for StockDataTool {
    async fn execute(&self, _params: Value) -> pulse_agent::Result<Value> {
        let snapshot = self.snapshot().await;
        serde_json::to_value(&snapshot).map_err(|e| pulse_agent::Error::ToolFailed {
            tool: TOOL_NAME.to_string(),
            reason: e.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        "Fetches current stock market data including major indices (S&P 500, NASDAQ, DOW) \
         and individual stock quotes. Returns real-time market information."
    }

    fn input_schema(&self) -> Value {
        schema::empty_object()
    }
}
