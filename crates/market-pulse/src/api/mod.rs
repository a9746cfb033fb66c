//! External market data APIs

pub mod alpha_vantage;

pub use alpha_vantage::AlphaVantageClient;
