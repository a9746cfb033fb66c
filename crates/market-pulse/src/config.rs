//! Configuration: the YAML agent file and the secrets from the environment

use crate::error::{PulseError, Result};
use crate::market::DEFAULT_SYMBOLS;
use crate::platforms::SendOptions;
use chrono_tz::Tz;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use pulse_utils::non_empty;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Config file used when `MARKET_PULSE_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "MARKET_PULSE_CONFIG";
/// Prefix for env overrides, e.g. `MARKET_PULSE_AGENT__MODEL`
pub const ENV_PREFIX: &str = "MARKET_PULSE_";

/// Top-level config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub agent: AgentConfig,
}

/// The `agent:` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub system_prompt: String,

    /// Provider model id, e.g. `claude-sonnet-4-5`
    #[serde(default)]
    pub model: String,

    /// Only `anthropic` is implemented
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub telegram: TelegramSettings,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Tickers included in the snapshot
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
}

/// When the run is triggered
///
/// Scheduling itself is done by an external timer; `cron` is kept for
/// reference and `timezone` controls how the prompt states the time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub cron: String,
    /// IANA zone name; empty means the host's local time
    #[serde(default)]
    pub timezone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelegramSettings {
    #[serde(default)]
    pub parse_mode: String,
    #[serde(default)]
    pub disable_notification: bool,
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_max_tokens() -> usize {
    1024
}

fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(ToString::to_string).collect()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: String::new(),
            model: String::new(),
            provider: default_provider(),
            schedule: ScheduleConfig::default(),
            telegram: TelegramSettings::default(),
            max_tokens: default_max_tokens(),
            symbols: default_symbols(),
        }
    }
}

impl AppConfig {
    /// Config path from `MARKET_PULSE_CONFIG`, else `config.yaml`
    pub fn path_from_env() -> PathBuf {
        non_empty(std::env::var(CONFIG_PATH_ENV).ok())
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    /// Read the config file at `path`, apply `MARKET_PULSE_*` env overrides, validate
    ///
    /// A missing or unreadable file is an error rather than an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PulseError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::extract(
            Figment::new()
                .merge(Yaml::string(&contents))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Parse and validate YAML text, without env overrides
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Self::extract(Figment::new().merge(Yaml::string(contents)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| PulseError::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let agent = &self.agent;

        if agent.model.trim().is_empty() {
            return Err(PulseError::ConfigError("agent.model must be set".to_string()));
        }
        if agent.max_tokens == 0 {
            return Err(PulseError::ConfigError(
                "agent.max_tokens must be greater than 0".to_string(),
            ));
        }
        if agent.symbols.iter().all(|s| s.trim().is_empty()) {
            return Err(PulseError::ConfigError(
                "agent.symbols must name at least one ticker".to_string(),
            ));
        }
        self.timezone()?;

        Ok(())
    }

    /// Parsed schedule timezone; `None` when unset
    pub fn timezone(&self) -> Result<Option<Tz>> {
        let name = self.agent.schedule.timezone.trim();
        if name.is_empty() {
            return Ok(None);
        }
        name.parse::<Tz>()
            .map(Some)
            .map_err(|_| PulseError::ConfigError(format!("Unknown timezone: {name}")))
    }

    /// Non-blank tickers, upper-cased
    pub fn symbols(&self) -> Vec<String> {
        self.agent
            .symbols
            .iter()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn send_options(&self) -> SendOptions {
        let telegram = &self.agent.telegram;
        SendOptions {
            parse_mode: non_empty(Some(telegram.parse_mode.clone())),
            disable_notification: telegram.disable_notification,
        }
    }
}

pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ALPHAVANTAGE_API_KEY: &str = "ALPHAVANTAGE_API_KEY";

/// Credentials and destinations read from the environment
#[derive(Clone)]
pub struct Secrets {
    pub anthropic_api_key: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub alphavantage_api_key: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve secrets through `lookup`; blank values count as missing
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &'static str| non_empty(lookup(key)).ok_or(PulseError::MissingEnv(key));

        Ok(Self {
            anthropic_api_key: required(ANTHROPIC_API_KEY)?,
            telegram_bot_token: required(TELEGRAM_BOT_TOKEN)?,
            telegram_chat_id: required(TELEGRAM_CHAT_ID)?,
            alphavantage_api_key: non_empty(lookup(ALPHAVANTAGE_API_KEY)),
        })
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("anthropic_api_key", &"<redacted>")
            .field("telegram_bot_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("alphavantage_api_key", &self.alphavantage_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
