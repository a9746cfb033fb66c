//! market-pulse CLI
//!
//! Runs once: generates a stock market update and posts it to Telegram.
//! Scheduling is left to cron or whatever invokes the binary.
//!
//! # Usage
//!
//! ```bash
//! export ANTHROPIC_API_KEY=...
//! export TELEGRAM_BOT_TOKEN=...
//! export TELEGRAM_CHAT_ID=...
//! export ALPHAVANTAGE_API_KEY=...   # optional, synthetic quotes without it
//!
//! cargo run --bin market-pulse
//! ```

use anyhow::Context;
use clap::Parser;
use market_pulse::{AppConfig, Pipeline, Secrets};
use pulse_llm::providers::AnthropicProvider;
use pulse_utils::{EnvFile, init_tracing, load_env_file};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "market-pulse")]
#[command(about = "Post an LLM-written stock market update to Telegram", long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    version: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    if args.version {
        println!("market-pulse {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let env_file = load_env_file();
    init_tracing("info");
    match env_file {
        EnvFile::Loaded(path) => debug!("Loaded environment from {}", path.display()),
        EnvFile::NotFound => debug!("No .env file found"),
        EnvFile::Invalid(reason) => warn!("Ignoring unreadable .env file: {reason}"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config_path = AppConfig::path_from_env();
    let config = AppConfig::load(&config_path)?;
    let secrets = Secrets::from_env()?;
    debug!(?secrets, model = %config.agent.model, "Configuration loaded");

    if config.agent.provider != "anthropic" {
        warn!(
            provider = %config.agent.provider,
            "Only the anthropic provider is supported, using it anyway"
        );
    }

    let provider = Arc::new(
        AnthropicProvider::new(secrets.anthropic_api_key.clone())
            .context("Failed to create Anthropic provider")?,
    );
    let pipeline = Pipeline::from_env_parts(&config, &secrets, provider)?;

    let message = pipeline.run().await?;
    info!(chars = message.chars().count(), "Run complete");
    Ok(())
}
