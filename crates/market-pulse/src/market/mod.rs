//! Market data: quotes, session status, and the snapshot built from them

pub mod quote;
pub mod snapshot;
pub mod status;

pub use quote::{Quote, QuoteFetcher, QuoteSource};
pub use snapshot::{DEFAULT_SYMBOLS, MarketSnapshot};
pub use status::MarketStatus;
