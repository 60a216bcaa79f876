//! Command line arguments.
//!
//! The three figures are taken as raw strings so that numeric conversion
//! failures are reported by [`crate::parse_input`] in the CLI's own format
//! rather than as usage errors.
//!
//! Any token in a figure slot is a value, even one starting with `-`
//! (`-.5`, `-inf`, `-h`). Help and version are therefore long-only flags.

use clap::{ArgAction, Parser};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "calculate-reimbursement",
    version,
    about = "Compute a travel expense reimbursement from trip duration, miles and receipts.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Trip duration in days (integer).
    #[arg(value_name = "trip_duration_days", allow_hyphen_values = true)]
    pub trip_duration_days: String,

    /// Miles traveled.
    #[arg(value_name = "miles_traveled", allow_hyphen_values = true)]
    pub miles_traveled: String,

    /// Total submitted receipts in dollars.
    #[arg(value_name = "total_receipts_amount", allow_hyphen_values = true)]
    pub total_receipts_amount: String,

    /// Output format (default: REIMBURSE_FORMAT or plain).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reject non-positive days and negative or non-finite figures.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "calculate-reimbursement",
            "5",
            "500",
            "600",
            "--format",
            "json",
            "--strict",
        ])
        .unwrap();

        assert_eq!(cli.trip_duration_days, "5");
        assert_eq!(cli.miles_traveled, "500");
        assert_eq!(cli.total_receipts_amount, "600");
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.strict);
    }

    #[test]
    fn test_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["calculate-reimbursement", "3", "-100", "-50.5"]).unwrap();
        assert_eq!(cli.miles_traveled, "-100");
        assert_eq!(cli.total_receipts_amount, "-50.5");
    }

    #[test]
    fn test_hyphen_tokens_are_figures() {
        let cli = Cli::try_parse_from(["calculate-reimbursement", "3", "-.5", "-inf"]).unwrap();
        assert_eq!(cli.miles_traveled, "-.5");
        assert_eq!(cli.total_receipts_amount, "-inf");

        let cli = Cli::try_parse_from(["calculate-reimbursement", "-h", "1", "1"]).unwrap();
        assert_eq!(cli.trip_duration_days, "-h");

        let cli = Cli::try_parse_from(["calculate-reimbursement", "-V", "1", "1"]).unwrap();
        assert_eq!(cli.trip_duration_days, "-V");
    }

    #[test]
    fn test_long_help_and_version() {
        let err = Cli::try_parse_from(["calculate-reimbursement", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["calculate-reimbursement", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["calculate-reimbursement", "5", "500"]).is_err());
        assert!(Cli::try_parse_from(["calculate-reimbursement", "5", "500", "600", "7"]).is_err());
        assert!(Cli::try_parse_from(["calculate-reimbursement"]).is_err());
    }
}
