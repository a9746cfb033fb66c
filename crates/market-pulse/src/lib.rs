//! Scheduled stock market updates for Telegram
//!
//! Each run collects a few index quotes and the current US session status,
//! lets an LLM write a short update (it pulls the data through the
//! `get_stock_data` tool), and posts the result to a Telegram chat.
//!
//! # Architecture
//!
//! - [`market`]: quotes, session classification, the snapshot given to the model
//! - [`api`]: Alpha Vantage client
//! - [`platforms`]: Telegram delivery
//! - [`tools`]: the tool the model calls
//! - [`pipeline`]: wires config, agent, and delivery into one run
//!
//! # Example
//!
//! ```rust,ignore
//! use market_pulse::{AppConfig, Pipeline, Secrets};
//! use pulse_llm::providers::AnthropicProvider;
//! use std::sync::Arc;
//!
//! let config = AppConfig::load("config.yaml".as_ref())?;
//! let secrets = Secrets::from_env()?;
//! let provider = Arc::new(AnthropicProvider::new(&secrets.anthropic_api_key)?);
//! let message = Pipeline::from_env_parts(&config, &secrets, provider)?.run().await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod market;
pub mod pipeline;
pub mod platforms;
pub mod prompts;
pub mod tools;

pub use config::{AppConfig, Secrets};
pub use error::{PulseError, Result};
pub use market::{MarketSnapshot, MarketStatus, Quote, QuoteFetcher, QuoteSource};
pub use pipeline::Pipeline;
