//! `.env` discovery and environment lookups

use std::path::PathBuf;

/// Outcome of looking for a `.env` file
#[derive(Debug)]
pub enum EnvFile {
    /// Loaded from this path
    Loaded(PathBuf),
    /// No `.env` in the working directory or its ancestors
    NotFound,
    /// Found but unreadable or malformed
    Invalid(String),
}

/// Load `.env` into the process environment without overriding existing vars
///
/// Runs before logging is initialised so `RUST_LOG` can come from the file;
/// the caller logs the outcome afterwards.
pub fn load_env_file() -> EnvFile {
    match dotenvy::dotenv() {
        Ok(path) => EnvFile::Loaded(path),
        Err(e) if e.not_found() => EnvFile::NotFound,
        Err(e) => EnvFile::Invalid(e.to_string()),
    }
}

/// `Some(value)` unless the value is missing or blank
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
