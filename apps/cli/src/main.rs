//! # calculate-reimbursement
//!
//! ```bash
//! calculate-reimbursement <trip_duration_days> <miles_traveled> <total_receipts_amount>
//! ```
//!
//! ## Startup Sequence
//! 1. Load `REIMBURSE_*` configuration
//! 2. Initialize tracing (stderr)
//! 3. Parse arguments, calculate, print
//!
//! Exit status is 0 on success and 1 on any error.

use std::process::ExitCode;

use reimburse_cli::config::AppConfig;
use reimburse_cli::error::CliError;
use tracing::debug;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = CliError::from(err);
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    reimburse_cli::init_tracing(&config);
    debug!(?config, "Configuration loaded");

    match reimburse_cli::run(std::env::args_os(), &config) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.to_string().trim_end());
            ExitCode::from(err.exit_code())
        }
    }
}
