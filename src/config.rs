//! Configuration management for the contact book.
//!
//! Everything is optional: with no environment set the program behaves
//! exactly as documented for the interactive protocol. A `.env` file is
//! loaded if present, without printing anything to stdout.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Prompt written before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Fallback tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "error";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt written before each read (default: "Enter command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: prompt string (default: "Enter command: ")
    /// - `LOG_LEVEL`: logging level (default: "error"), checked by
    ///   [`Config::fallback_filter`] only when it is actually used
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config { prompt, log_level })
    }

    /// Tracing filter built from `log_level`, for when `RUST_LOG` is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `log_level` is not a known level.
    pub fn fallback_filter(&self) -> ConfigResult<EnvFilter> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!(
                    "Must be one of {}, got: {}",
                    LOG_LEVELS.join(", "),
                    self.log_level
                ),
            });
        }

        Ok(EnvFilter::new(&self.log_level))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
