//! # Output Rendering
//!
//! Turns a [`Reimbursement`] into what goes on standard output.
//!
//! ## Plain Format
//! The amount in shortest round-trip form with at least one fractional
//! digit:
//!
//! ```text
//! 34.0        1078.14       1516.88
//! ```
//!
//! When the low-effort cap replaced the subtotal (possible only for
//! out-of-domain inputs such as zero days) the amount is the whole-dollar
//! cap itself and is printed without a fractional part: `0`, `-200`.
//!
//! ## JSON Format
//! ```json
//! {
//!   "input": { "days": 5, "miles": 500.0, "receipts": 600.0 },
//!   "breakdown": { "efficiency": 100.0, "location": "Medium", ... },
//!   "amount": 1075.48,
//!   "amount_cents": 107548,
//!   "display": "$1075.48"
//! }
//! ```

use clap::ValueEnum;
use reimburse_core::{Breakdown, Reimbursement, TripInput};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Above this magnitude floats print in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e16;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Just the amount
    #[default]
    Plain,
    /// Inputs, every intermediate step and the amount
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    input: &'a TripInput,
    breakdown: &'a Breakdown,
    amount: f64,
    amount_cents: i64,
    display: String,
}

/// Renders a result in the requested format.
pub fn render(result: &Reimbursement, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Plain => Ok(format_amount(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Plain amount as printed by the CLI.
pub fn format_amount(result: &Reimbursement) -> String {
    if result.breakdown.is_whole_dollar_cap() {
        if let Some(cap) = result.breakdown.low_effort_cap {
            return cap.to_string();
        }
    }
    format_float(result.amount)
}

fn render_json(result: &Reimbursement) -> Result<String, CliError> {
    let money = result.money();
    let report = JsonReport {
        input: &result.input,
        breakdown: &result.breakdown,
        amount: result.amount,
        amount_cents: money.cents(),
        display: money.to_string(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Formats a float in shortest round-trip form: `34.0`, `1078.14`,
/// `1e+16`, `nan`, `-inf`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.abs() < EXPONENT_THRESHOLD {
        return format!("{:?}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
