//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command line flags override what is loaded here.
//!
//! | Variable            | Default | Meaning                               |
//! |---------------------|---------|---------------------------------------|
//! | `REIMBURSE_LOG`     | `warn`  | tracing filter when `RUST_LOG` unset  |
//! | `REIMBURSE_FORMAT`  | `plain` | `plain` or `json`                     |
//! | `REIMBURSE_STRICT`  | `false` | validate inputs before calculating    |

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;

use crate::output::OutputFormat;

pub const LOG_VAR: &str = "REIMBURSE_LOG";
pub const FORMAT_VAR: &str = "REIMBURSE_FORMAT";
pub const STRICT_VAR: &str = "REIMBURSE_STRICT";

/// Default tracing filter. Quiet unless something is wrong.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Output format when `--format` is not given
    pub format: OutputFormat,

    /// Validate inputs even without `--strict`
    pub strict: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::Plain,
            strict: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let log_filter = lookup(LOG_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let format = match lookup(FORMAT_VAR) {
            Some(value) => OutputFormat::from_str(value.trim(), true)
                .map_err(|_| ConfigError::InvalidValue(FORMAT_VAR.to_string(), value))?,
            None => defaults.format,
        };

        let strict = match lookup(STRICT_VAR) {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| ConfigError::InvalidValue(STRICT_VAR.to_string(), value))?,
            None => defaults.strict,
        };

        Ok(AppConfig {
            log_filter,
            format,
            strict,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: '{1}'")]
    InvalidValue(String, String),
}

// =============================================================================
// Unit Tests
// =============================================================================
