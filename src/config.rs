//! Application configuration loaded from environment variables.
//!
//! The store itself reads no environment; only the binary consults this.

use std::env;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// Structured JSON, one object per event
    Json,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Populate empty collections with the initial data
    pub seed_on_startup: bool,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            seed_on_startup: true,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            seed_on_startup: match env::var("SEED_ON_STARTUP") {
                Ok(v) => parse_bool("SEED_ON_STARTUP", &v)?,
                Err(_) => true,
            },
            log_format: match env::var("LOG_FORMAT") {
                Ok(v) => parse_log_format(&v)?,
                Err(_) => LogFormat::Pretty,
            },
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(name, other.to_string())),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "pretty" | "text" => Ok(LogFormat::Pretty),
        other => Err(ConfigError::Invalid("LOG_FORMAT", other.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: `{1}`")]
    Invalid(&'static str, String),
}
