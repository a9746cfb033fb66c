//! Telegram delivery via the Bot API `sendMessage` method

use crate::error::{PulseError, Result};
use reqwest::{Client, StatusCode};
use std::fmt;
use tracing::{debug, instrument};

const API_BASE: &str = "https://api.telegram.org";

/// Per-message delivery options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// `Markdown`, `MarkdownV2` or `HTML`; empty means plain text
    pub parse_mode: Option<String>,
    /// Deliver silently
    pub disable_notification: bool,
}

/// Posts messages as a bot
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, API_BASE)
    }

    /// Use another API host; `/bot<token>/sendMessage` is appended
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Send one text message to `chat_id`
    ///
    /// Succeeds only on HTTP 200. Any other status is returned with the
    /// response body verbatim. The request URL contains the bot token, so it
    /// is stripped from transport errors.
    #[instrument(skip(self, text, options), fields(len = text.len()))]
    pub async fn send_message(&self, chat_id: &str, text: &str, options: &SendOptions) -> Result<()> {
        let mut form = vec![("chat_id", chat_id), ("text", text)];
        if let Some(mode) = options.parse_mode.as_deref().filter(|m| !m.is_empty()) {
            form.push(("parse_mode", mode));
        }
        if options.disable_notification {
            form.push(("disable_notification", "true"));
        }

        let response = self
            .client
            .post(format!("{}/bot{}/sendMessage", self.base_url, self.token))
            .form(&form)
            .send()
            .await
            .map_err(|e| PulseError::TelegramTransport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PulseError::TelegramStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Telegram accepted message");
        Ok(())
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
