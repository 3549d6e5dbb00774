//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so the API base URL
//! and log level are baked in from `HEALTHCARD_*` variables when the crate is
//! compiled. Absent values fall back to same-origin requests and `info` logs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every API path. Empty means same-origin.
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `HEALTHCARD_API_BASE`: e.g. `http://127.0.0.1:5000` (default same-origin)
    /// - `HEALTHCARD_LOG_LEVEL`: `error|warn|info|debug|trace|off` (default `info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if the log level does not parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("HEALTHCARD_API_BASE"), option_env!("HEALTHCARD_LOG_LEVEL"))
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if `log_level` is set but not a level name.
    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = api_base
            .map(str::trim)
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let log_level = parse_log_level(log_level)?;
        Ok(Self { api_base, log_level })
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
