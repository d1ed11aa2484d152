//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HYPERCARS_LOG_FORMAT` - `text` or `json` (default: text)
//! - `HYPERCARS_CURRENCY` - Currency for script prices without one (default: NPR)
//! - `RUST_LOG` - Standard `tracing` filter directives

use hypercars_core::CurrencyCode;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected 'text' or 'json', got '{s}'")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log output format
    pub log_format: LogFormat,
    /// Currency applied to script prices that don't name one
    pub currency: CurrencyCode,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = match lookup("HYPERCARS_LOG_FORMAT") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("HYPERCARS_LOG_FORMAT".to_owned(), e))?,
            None => LogFormat::default(),
        };

        let currency = match lookup("HYPERCARS_CURRENCY") {
            Some(value) => value.parse().map_err(|e: hypercars_core::CurrencyCodeError| {
                ConfigError::InvalidEnvVar("HYPERCARS_CURRENCY".to_owned(), e.to_string())
            })?,
            None => CurrencyCode::default(),
        };

        Ok(Self {
            log_format,
            currency,
        })
    }
}
