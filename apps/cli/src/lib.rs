//! # reimburse-cli
//!
//! Command line front end for `reimburse-core`.
//!
//! ## Module Organization
//! ```text
//! reimburse_cli/
//! ├── lib.rs          ◄─── You are here (run, input parsing, tracing setup)
//! ├── args.rs         ◄─── clap definitions
//! ├── config.rs       ◄─── REIMBURSE_* environment configuration
//! ├── output.rs       ◄─── plain / JSON rendering
//! └── error.rs        ◄─── CliError and exit status
//! ```
//!
//! ## Invocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate-reimbursement 5 500 600                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cli::try_parse_from ── wrong count ──► Usage (stderr, exit 1)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_input ────────── bad number ───► Parse (stderr, exit 1)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_trip (only --strict) ───────► Invalid (stderr, exit 1)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate (noise always off) ──► render ──► stdout, exit 0             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod output;

use std::ffi::OsString;
use std::fmt::Display;
use std::str::FromStr;

use clap::error::ErrorKind;
use clap::Parser;
use reimburse_core::validation::{
    is_within_documented_domain, validate_trip, DAYS_FIELD, MILES_FIELD, RECEIPTS_FIELD,
};
use reimburse_core::{CalculationOptions, ReimbursementCalculator, TripInput};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::Cli;
use config::AppConfig;
use error::CliError;

/// Runs one invocation and returns the text for standard output.
///
/// `--help` and `--version` succeed with their text. Everything else that
/// is not a valid calculation is a [`CliError`].
pub fn run<I, T>(args: I, config: &AppConfig) -> Result<String, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(err.render().to_string()),
                kind => {
                    debug!(?kind, "Rejected command line");
                    Err(CliError::Usage(err.render().to_string()))
                }
            };
        }
    };

    let input = parse_input(
        &cli.trip_duration_days,
        &cli.miles_traveled,
        &cli.total_receipts_amount,
    )?;

    if cli.strict || config.strict {
        validate_trip(&input)?;
    }

    if !is_within_documented_domain(&input) {
        info!(
            days = input.days,
            miles = input.miles,
            receipts = input.receipts,
            "Input outside the documented domain; calculating anyway"
        );
    }

    let mut calculator = ReimbursementCalculator::new();
    let result = calculator.calculate(&input, CalculationOptions::deterministic());

    output::render(&result, cli.format.unwrap_or(config.format))
}

/// Parses the three raw figures: days as an integer, miles and receipts as
/// reals. Surrounding whitespace is ignored.
///
/// ## Example
/// ```rust
/// use reimburse_cli::parse_input;
///
/// let input = parse_input("5", " 500 ", "600.25").unwrap();
/// assert_eq!(input.days, 5);
/// assert_eq!(input.receipts, 600.25);
///
/// assert!(parse_input("5.5", "500", "600").is_err());
/// ```
pub fn parse_input(days: &str, miles: &str, receipts: &str) -> Result<TripInput, CliError> {
    Ok(TripInput::new(
        parse_field(DAYS_FIELD, days)?,
        parse_field(MILES_FIELD, miles)?,
        parse_field(RECEIPTS_FIELD, receipts)?,
    ))
}

fn parse_field<T>(field: &'static str, raw: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|err: T::Err| CliError::Parse {
        field,
        value: raw.to_string(),
        reason: err.to_string(),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (takes priority)
/// - `REIMBURSE_LOG=reimburse_core=debug` - Per-calculation events
/// - Default: WARN level
///
/// Logs go to standard error; standard output carries only the result.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
