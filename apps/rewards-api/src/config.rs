//! Rewards API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Rewards API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP server port
    pub port: u16,

    /// Bind address
    pub bind_addr: String,

    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Reject receipts whose fields are not well-formed
    pub strict_validation: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: DEFAULT_PORT,
            bind_addr: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            strict_validation: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            None => defaults.port,
        };

        let strict_validation = match lookup("STRICT_VALIDATION") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("STRICT_VALIDATION".to_string()))?,
            None => defaults.strict_validation,
        };

        let config = ApiConfig {
            port,
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            strict_validation,
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BIND_ADDR".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
