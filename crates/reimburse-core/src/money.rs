//! # Money Module
//!
//! Rounding of computed reimbursements and the `Money` type used to present
//! them.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FORMULA RUNS IN f64                                                │
//! │                                                                         │
//! │  Rates like 0.70/mi and multipliers like 1.15 are applied in binary     │
//! │  floating point, step by step, so results match the published rules    │
//! │  bit for bit.                                                           │
//! │                                                                         │
//! │  THE RESULT LEAVES AS CENTS                                             │
//! │    round_to_cents(1078.140625) = 1078.14                                │
//! │    Money::from_rounded_amount(1078.14) = 107814 cents                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use reimburse_core::money::{round_to_cents, Money};
//!
//! let amount = round_to_cents(1078.140625);
//! assert_eq!(amount, 1078.14);
//!
//! let money = Money::from_rounded_amount(amount);
//! assert_eq!(money.cents(), 107814);
//! assert_eq!(money.to_string(), "$1078.14");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a value to two decimal places using round-half-to-even on the
/// exact binary value.
///
/// ## Tie Behavior
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Only values whose binary form is EXACTLY halfway are ties:          │
/// │    0.125 → 0.12   (tie, 2 is even)                                   │
/// │    0.375 → 0.38   (tie, 8 is even)                                   │
/// │                                                                     │
/// │  Decimal literals that look like ties usually are not:              │
/// │    2.675 is stored as 2.67499999999999982236431605997495353221893310546875 │
/// │    2.675 → 2.67                                                      │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Implementation
/// `{:.2}` formatting performs exact decimal expansion with half-to-even
/// ties; parsing the text back yields the nearest `f64`. Non-finite values
/// pass through unchanged.
///
/// ## Example
/// ```rust
/// use reimburse_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(34.0), 34.0);
/// assert_eq!(round_to_cents(0.125), 0.12);
/// assert_eq!(round_to_cents(2.675), 2.67);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

// =============================================================================
// Money Type
// =============================================================================

/// A rounded reimbursement in whole cents.
///
/// Signed: out-of-domain inputs (negative receipts, zero days) can produce
/// negative reimbursements, which are reported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Converts an amount that has already been through [`round_to_cents`].
    ///
    /// The residual float error (e.g. `1078.14 * 100 = 107814.00000000001`)
    /// is removed by rounding to the nearest cent. Non-finite amounts map to
    /// zero.
    ///
    /// ## Example
    /// ```rust
    /// use reimburse_core::money::Money;
    ///
    /// assert_eq!(Money::from_rounded_amount(1078.14).cents(), 107814);
    /// assert_eq!(Money::from_rounded_amount(-12.5).cents(), -1250);
    /// ```
    pub fn from_rounded_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money(0);
        }
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents_plain_values() {
        assert_eq!(round_to_cents(34.0), 34.0);
        assert_eq!(round_to_cents(1078.140625), 1078.14);
        assert_eq!(round_to_cents(59.499999), 59.5);
        assert_eq!(round_to_cents(-3.14159), -3.14);
    }

    #[test]
    fn test_round_to_cents_exact_ties_go_to_even() {
        // Exactly representable halfway values
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(0.625), 0.62);
        assert_eq!(round_to_cents(0.875), 0.88);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }

    #[test]
    fn test_round_to_cents_decimal_lookalike_ties() {
        // 2.675 and 1.005 are stored just below the tie
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(0.285), 0.28);
    }

    #[test]
    fn test_round_to_cents_non_finite_passthrough() {
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_to_cents(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_from_rounded_amount() {
        assert_eq!(Money::from_rounded_amount(1078.14).cents(), 107814);
        assert_eq!(Money::from_rounded_amount(34.0).cents(), 3400);
        assert_eq!(Money::from_rounded_amount(0.01).cents(), 1);
        assert_eq!(Money::from_rounded_amount(-12.5).cents(), -1250);
        assert_eq!(Money::from_rounded_amount(f64::NAN).cents(), 0);
        assert_eq!(Money::from_rounded_amount(f64::INFINITY).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rounded_amount(1078.14).to_string(), "$1078.14");
        assert_eq!(Money::from_rounded_amount(34.0).to_string(), "$34.00");
        assert_eq!(Money::from_rounded_amount(-5.5).to_string(), "-$5.50");
        assert_eq!(Money::from_rounded_amount(-0.07).to_string(), "-$0.07");
        assert_eq!(Money::from_rounded_amount(0.0).to_string(), "$0.00");
    }
}
