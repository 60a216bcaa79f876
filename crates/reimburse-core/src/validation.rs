//! # Validation Module
//!
//! Opt-in input validation for trip figures.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument parsing                                         │
//! │  ├── Type validation (integer days, real miles/receipts)               │
//! │  └── Always on: failure is a parse error                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (only with --strict or TripInput::validated)     │
//! │  ├── days > 0                                                          │
//! │  └── miles, receipts finite and >= 0                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Documented domains (diagnostic only, never rejects)          │
//! │  └── 1-14 days, 6-1317.07 miles, $1.42-$2494.69 receipts               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The default pipeline skips Layer 2: out-of-range figures flow through
//! the arithmetic and may produce negative or odd amounts.
//!
//! ## Usage
//! ```rust
//! use reimburse_core::validation::{validate_days, validate_miles};
//!
//! assert!(validate_days(5).is_ok());
//! assert!(validate_miles(-10.0).is_err());
//! ```

use std::ops::RangeInclusive;

use crate::error::ValidationError;
use crate::types::TripInput;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const DAYS_FIELD: &str = "trip_duration_days";
pub const MILES_FIELD: &str = "miles_traveled";
pub const RECEIPTS_FIELD: &str = "total_receipts_amount";

// =============================================================================
// Documented Domains
// =============================================================================

/// Trip durations the rules were fitted on.
pub const DAYS_DOMAIN: RangeInclusive<i64> = 1..=14;

/// Mileage the rules were fitted on.
pub const MILES_DOMAIN: RangeInclusive<f64> = 6.0..=1317.07;

/// Receipt totals the rules were fitted on.
pub const RECEIPTS_DOMAIN: RangeInclusive<f64> = 1.42..=2494.69;

/// Checks whether every figure falls inside the documented domains.
///
/// ## Example
/// ```rust
/// use reimburse_core::validation::is_within_documented_domain;
/// use reimburse_core::TripInput;
///
/// assert!(is_within_documented_domain(&TripInput::new(5, 500.0, 600.0)));
/// assert!(!is_within_documented_domain(&TripInput::new(1, 10.0, 0.0)));
/// ```
pub fn is_within_documented_domain(input: &TripInput) -> bool {
    DAYS_DOMAIN.contains(&input.days)
        && MILES_DOMAIN.contains(&input.miles)
        && RECEIPTS_DOMAIN.contains(&input.receipts)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a trip duration.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_days(days: i64) -> ValidationResult<()> {
    if days <= 0 {
        return Err(ValidationError::MustBePositive {
            field: DAYS_FIELD.to_string(),
            value: days,
        });
    }

    Ok(())
}

/// Validates miles traveled.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed)
pub fn validate_miles(miles: f64) -> ValidationResult<()> {
    validate_amount(MILES_FIELD, miles)
}

/// Validates total receipts.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed)
pub fn validate_receipts(receipts: f64) -> ValidationResult<()> {
    validate_amount(RECEIPTS_FIELD, receipts)
}

fn validate_amount(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
            value,
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

/// Validates all three figures of a trip. The first failure wins, in the
/// order days, miles, receipts.
pub fn validate_trip(input: &TripInput) -> ValidationResult<()> {
    validate_days(input.days)?;
    validate_miles(input.miles)?;
    validate_receipts(input.receipts)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_days() {
        assert!(validate_days(1).is_ok());
        assert!(validate_days(14).is_ok());
        assert!(validate_days(30).is_ok());

        assert!(validate_days(0).is_err());
        assert!(validate_days(-1).is_err());
    }

    #[test]
    fn test_validate_miles() {
        assert!(validate_miles(0.0).is_ok());
        assert!(validate_miles(1317.07).is_ok());

        assert!(validate_miles(-0.01).is_err());
        assert!(validate_miles(f64::NAN).is_err());
        assert!(validate_miles(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_receipts() {
        assert!(validate_receipts(0.0).is_ok());
        assert!(validate_receipts(2494.69).is_ok());

        assert!(matches!(
            validate_receipts(-5.0),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_receipts(f64::NEG_INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_trip_reports_first_failure() {
        let err = validate_trip(&TripInput::new(0, -1.0, -1.0)).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));

        let err = validate_trip(&TripInput::new(2, -1.0, -1.0)).unwrap_err();
        match err {
            ValidationError::MustBeNonNegative { field, .. } => assert_eq!(field, MILES_FIELD),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_documented_domain() {
        assert!(is_within_documented_domain(&TripInput::new(1, 6.0, 1.42)));
        assert!(is_within_documented_domain(&TripInput::new(14, 1317.07, 2494.69)));

        assert!(!is_within_documented_domain(&TripInput::new(15, 100.0, 100.0)));
        assert!(!is_within_documented_domain(&TripInput::new(3, 5.0, 100.0)));
        assert!(!is_within_documented_domain(&TripInput::new(3, 100.0, 3000.0)));
    }
}
