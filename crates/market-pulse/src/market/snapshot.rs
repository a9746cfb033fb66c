//! Market snapshot handed to the model

use super::{MarketStatus, Quote, QuoteSource};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// Default tickers: S&P 500, NASDAQ-100 and Dow Jones ETFs
pub const DEFAULT_SYMBOLS: [&str; 3] = ["SPY", "QQQ", "DIA"];

/// Quotes plus session status at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// RFC 3339 timestamp of collection
    pub timestamp: String,
    /// Successful quotes in request order
    pub indices: Vec<Quote>,
    pub market_status: MarketStatus,
}

impl MarketSnapshot {
    /// Fetch every symbol in turn and stamp the result with `now`
    ///
    /// Symbols whose fetch fails are logged and left out; duplicates are
    /// fetched once.
    pub async fn collect<S>(source: &S, symbols: &[String], now: DateTime<Utc>) -> Self
    where
        S: QuoteSource + ?Sized,
    {
        let mut seen = HashSet::new();
        let mut indices = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            if !seen.insert(symbol.as_str()) {
                continue;
            }
            match source.fetch_quote(symbol).await {
                Ok(quote) => indices.push(quote),
                Err(e) => warn!(symbol = %symbol, error = %e, "Failed to fetch quote, skipping"),
            }
        }

        let snapshot = Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            indices,
            market_status: MarketStatus::classify(now),
        };
        info!(
            quotes = snapshot.indices.len(),
            requested = symbols.len(),
            market_status = %snapshot.market_status,
            "Market snapshot collected"
        );
        snapshot
    }
}
