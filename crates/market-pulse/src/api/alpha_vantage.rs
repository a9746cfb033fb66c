//! Alpha Vantage API client

use crate::error::{PulseError, Result};
use crate::market::Quote;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use tracing::debug;

const BASE_URL: &str = "https://www.alphavantage.co";

/// Alpha Vantage client, limited to the `GLOBAL_QUOTE` endpoint
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Point the client at another host; `/query` is appended
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Latest price and change for `symbol`
    ///
    /// Errors on transport failure, a non-200 status, a body that is not a
    /// JSON object, or a body without a `"Global Quote"` object (which is
    /// how the API reports rate limiting). Inside the quote object, missing
    /// or unparseable numbers read as zero.
    pub async fn global_quote(&self, symbol: &str) -> Result<Quote> {
        let params = [
            ("function", "GLOBAL_QUOTE"),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];

        let response = self
            .client
            .get(format!("{}/query", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        if response.status() != StatusCode::OK {
            return Err(PulseError::AlphaVantageError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let data: Value = serde_json::from_str(&response.text().await?)?;
        debug!(symbol, "Alpha Vantage response received");

        let quote = data
            .get("Global Quote")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                let detail = data
                    .get("Note")
                    .or_else(|| data.get("Information"))
                    .or_else(|| data.get("Error Message"))
                    .and_then(Value::as_str)
                    .unwrap_or("no Global Quote in response");
                PulseError::AlphaVantageError(detail.to_string())
            })?;

        Ok(Quote {
            symbol: symbol.to_string(),
            price: parse_field(quote.get("05. price")),
            change: parse_field(quote.get("09. change")),
        })
    }
}

impl fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn parse_field(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0.0)
}
