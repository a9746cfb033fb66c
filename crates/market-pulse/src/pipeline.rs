//! One run: prompt → agent → Telegram

use crate::config::{AppConfig, Secrets};
use crate::error::{PulseError, Result};
use crate::market::{QuoteFetcher, QuoteSource};
use crate::platforms::{SendOptions, TelegramClient};
use crate::prompts::market_update_prompt;
use crate::tools::StockDataTool;
use chrono::Utc;
use chrono_tz::Tz;
use pulse_agent::{AgentExecutor, ExecutorConfig, ToolRegistry};
use pulse_llm::LlmProvider;
use pulse_utils::non_empty;
use std::sync::Arc;
use tracing::info;

/// Everything a run needs, wired together
pub struct Pipeline {
    executor: AgentExecutor,
    telegram: TelegramClient,
    chat_id: String,
    send_options: SendOptions,
    timezone: Option<Tz>,
}

impl Pipeline {
    pub fn new(
        executor: AgentExecutor,
        telegram: TelegramClient,
        chat_id: impl Into<String>,
        send_options: SendOptions,
        timezone: Option<Tz>,
    ) -> Self {
        Self {
            executor,
            telegram,
            chat_id: chat_id.into(),
            send_options,
            timezone,
        }
    }

    /// Wire the pipeline from loaded config and secrets
    ///
    /// The quote source and Telegram client are passed in so callers can
    /// point them elsewhere; [`Pipeline::from_env_parts`] uses the real ones.
    pub fn build(
        config: &AppConfig,
        secrets: &Secrets,
        provider: Arc<dyn LlmProvider>,
        quotes: Arc<dyn QuoteSource>,
        telegram: TelegramClient,
    ) -> Result<Self> {
        let tools = ToolRegistry::new()
            .with_tool(Arc::new(StockDataTool::new(quotes, config.symbols())));

        let agent = &config.agent;
        let executor_config = ExecutorConfig {
            model: agent.model.clone(),
            system_prompt: non_empty(Some(agent.system_prompt.clone())),
            max_tokens: agent.max_tokens,
            ..ExecutorConfig::default()
        };

        Ok(Self::new(
            AgentExecutor::new(provider, tools, executor_config),
            telegram,
            secrets.telegram_chat_id.clone(),
            config.send_options(),
            config.timezone()?,
        ))
    }

    /// Production wiring: Alpha Vantage (when keyed) and the public Telegram API
    pub fn from_env_parts(
        config: &AppConfig,
        secrets: &Secrets,
        provider: Arc<dyn LlmProvider>,
    ) -> Result<Self> {
        let quotes = QuoteFetcher::from_api_key(secrets.alphavantage_api_key.clone());
        if !quotes.has_provider() {
            info!("ALPHAVANTAGE_API_KEY not set, quotes will be synthetic placeholders");
        }

        Self::build(
            config,
            secrets,
            provider,
            Arc::new(quotes),
            TelegramClient::new(secrets.telegram_bot_token.clone()),
        )
    }

    /// Generate the update and deliver it; returns the message sent
    pub async fn run(&self) -> Result<String> {
        info!(model = %self.executor.config().model, "Fetching stock market update...");
        let prompt = market_update_prompt(Utc::now(), self.timezone);

        let message = self.executor.run(prompt).await?;
        if message.trim().is_empty() {
            return Err(PulseError::EmptyMessage);
        }
        info!("Generated message:\n{message}");

        self.telegram
            .send_message(&self.chat_id, &message, &self.send_options)
            .await?;
        info!("Successfully sent stock market update to Telegram");

        Ok(message)
    }
}
