//! Shared utilities for market-pulse
//!
//! Logging setup and environment discovery used by the binary.

pub mod env;
pub mod logging;

pub use env::{EnvFile, load_env_file, non_empty};
pub use logging::{LogFormat, init_tracing};
