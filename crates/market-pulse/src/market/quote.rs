//! Quotes and where they come from

use crate::api::AlphaVantageClient;
use crate::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Price and change for one ticker at fetch time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
}

impl Quote {
    /// Placeholder quote derived from the clock
    ///
    /// THIS IS NOT MARKET DATA. It exists so the update still has numbers
    /// when no data provider is configured or the provider is unreachable.
    /// With `k = (unix_seconds mod 100) / 10`, price is `450 + k` and change
    /// is `-5 + k`, so price stays in [450, 460) and change in [-5, 5).
    pub fn synthetic(symbol: &str, unix_seconds: i64) -> Self {
        let k = unix_seconds.rem_euclid(100) as f64 / 10.0;
        Self {
            symbol: symbol.to_string(),
            price: 450.0 + k,
            change: -5.0 + k,
        }
    }
}

/// Something that can produce a quote for a symbol
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote>;
}

/// Production quote source: Alpha Vantage when keyed, synthetic otherwise
///
/// Never returns `Err`; provider failures are logged and replaced with
/// [`Quote::synthetic`].
#[derive(Debug, Clone, Default)]
pub struct QuoteFetcher {
    alpha_vantage: Option<AlphaVantageClient>,
}

impl QuoteFetcher {
    pub fn new(alpha_vantage: Option<AlphaVantageClient>) -> Self {
        Self { alpha_vantage }
    }

    /// Keyed fetcher when `api_key` is present, synthetic-only otherwise
    pub fn from_api_key(api_key: Option<String>) -> Self {
        Self::new(api_key.map(AlphaVantageClient::new))
    }

    pub fn has_provider(&self) -> bool {
        self.alpha_vantage.is_some()
    }
}

#[async_trait]
impl QuoteSource for QuoteFetcher {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote> {
        if let Some(client) = &self.alpha_vantage {
            match client.global_quote(symbol).await {
                Ok(quote) => return Ok(quote),
                Err(e) => warn!(symbol, error = %e, "Quote fetch failed, using synthetic placeholder"),
            }
        } else {
            debug!(symbol, "No data provider key, using synthetic placeholder");
        }

        Ok(Quote::synthetic(symbol, Utc::now().timestamp()))
    }
}
