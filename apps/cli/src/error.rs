//! # CLI Error Type
//!
//! Every failure the command line can report. All of them exit with status
//! 1 and print their message to standard error.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv                                                                   │
//! │   │                                                                     │
//! │   ├── wrong argument count ──────────► CliError::Usage                  │
//! │   │                                                                     │
//! │   ├── "abc" where a number belongs ──► CliError::Parse                  │
//! │   │                                                                     │
//! │   ├── --strict and days <= 0 ────────► CliError::Invalid                │
//! │   │                                                                     │
//! │   └── calculate (never fails) ──► render ──► CliError::Output (JSON)    │
//! │                                                                         │
//! │  Environment: REIMBURSE_* unreadable ► CliError::Config                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reimburse_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status for every failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Command line errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments or an unknown option. Holds the rendered
    /// usage text.
    #[error("{0}")]
    Usage(String),

    /// An argument could not be converted to its numeric type.
    #[error("Error: Invalid input format ({field}: invalid value '{value}': {reason})")]
    Parse {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Opt-in validation rejected the input.
    #[error("Error: Invalid input ({0})")]
    Invalid(#[from] ValidationError),

    /// Environment configuration could not be read.
    #[error("Error: {0}")]
    Config(#[from] ConfigError),

    /// The report could not be rendered.
    #[error("Error: Failed to render output ({0})")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = CliError::Parse {
            field: "trip_duration_days",
            value: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error: Invalid input format (trip_duration_days: invalid value 'abc': invalid digit found in string)"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validation_converts_to_cli_error() {
        let err: CliError = ValidationError::MustBePositive {
            field: "trip_duration_days".to_string(),
            value: 0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Error: Invalid input (trip_duration_days must be positive, got 0)"
        );
    }
}
