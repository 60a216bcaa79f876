//! # Domain Types
//!
//! Inputs, rate table, options and the per-step breakdown of a calculation.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TripInput     │   │    Location     │   │  PerDiemRate    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  days (i64)     │   │  Low            │   │  base_rate      │       │
//! │  │  miles (f64)    │   │  Medium         │   │  mie_rate       │       │
//! │  │  receipts (f64) │   │  High           │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────────────────────┐     │
//! │  │ CalculationOptions  │   │  Breakdown                          │     │
//! │  │  add_noise          │   │  every intermediate value of one    │     │
//! │  │  use_system_date    │   │  calculation, in step order         │     │
//! │  └─────────────────────┘   └─────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::validate_trip;

// =============================================================================
// Trip Input
// =============================================================================

/// The three figures submitted for one trip.
///
/// Values are taken as-is. Nothing here checks the documented domains
/// (1-14 days, 6-1317.07 miles, $1.42-$2494.69 receipts); use
/// [`TripInput::validated`] to opt into validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    /// Trip duration in days.
    pub days: i64,

    /// Miles traveled.
    pub miles: f64,

    /// Total submitted receipts in dollars.
    pub receipts: f64,
}

impl TripInput {
    /// Creates an unvalidated trip input.
    pub const fn new(days: i64, miles: f64, receipts: f64) -> Self {
        TripInput {
            days,
            miles,
            receipts,
        }
    }

    /// Creates a trip input after checking that days are positive and that
    /// miles and receipts are finite and non-negative.
    ///
    /// ## Example
    /// ```rust
    /// use reimburse_core::TripInput;
    ///
    /// assert!(TripInput::validated(5, 500.0, 600.0).is_ok());
    /// assert!(TripInput::validated(0, 500.0, 600.0).is_err());
    /// assert!(TripInput::validated(3, -1.0, 600.0).is_err());
    /// ```
    pub fn validated(days: i64, miles: f64, receipts: f64) -> Result<Self, ValidationError> {
        let input = TripInput::new(days, miles, receipts);
        validate_trip(&input)?;
        Ok(input)
    }
}

// =============================================================================
// Location
// =============================================================================

/// Location category inferred from trip intensity.
///
/// Not a geographic lookup: High means high effort or high activity, Low
/// means low effort or coasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Location {
    /// Returns the rates for this location.
    #[inline]
    pub const fn rates(&self) -> PerDiemRate {
        PerDiemRate::for_location(*self)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Location::Low => "Low",
            Location::Medium => "Medium",
            Location::High => "High",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Per-Diem Rate Table
// =============================================================================

/// Daily base rate and meals & incidental expenses (M&IE) rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerDiemRate {
    /// Daily lodging/base allowance.
    pub base_rate: f64,

    /// Daily M&IE allowance.
    pub mie_rate: f64,
}

/// Fixed per-diem table, keyed by location.
///
/// ```text
/// ┌──────────┬───────────┬──────────┐
/// │ Location │ Base Rate │ M&IE     │
/// ├──────────┼───────────┼──────────┤
/// │ Low      │ 15        │ 5        │
/// │ Medium   │ 50        │ 15       │
/// │ High     │ 65        │ 20       │
/// └──────────┴───────────┴──────────┘
/// ```
pub const PER_DIEM_TABLE: [(Location, PerDiemRate); 3] = [
    (
        Location::Low,
        PerDiemRate {
            base_rate: 15.0,
            mie_rate: 5.0,
        },
    ),
    (
        Location::Medium,
        PerDiemRate {
            base_rate: 50.0,
            mie_rate: 15.0,
        },
    ),
    (
        Location::High,
        PerDiemRate {
            base_rate: 65.0,
            mie_rate: 20.0,
        },
    ),
];

// Each row must sit at its location's discriminant.
const _: () = {
    let mut i = 0;
    while i < PER_DIEM_TABLE.len() {
        assert!(PER_DIEM_TABLE[i].0 as usize == i);
        i += 1;
    }
};

impl PerDiemRate {
    /// Looks up the rates for a location in [`PER_DIEM_TABLE`].
    pub const fn for_location(location: Location) -> Self {
        PER_DIEM_TABLE[location as usize].1
    }

    /// Full daily rate (base + M&IE).
    #[inline]
    pub fn daily(&self) -> f64 {
        self.base_rate + self.mie_rate
    }

    /// Rate for a travel day (first or last): base plus 75% of M&IE.
    #[inline]
    pub fn travel_day(&self) -> f64 {
        self.base_rate + self.mie_rate * 0.75
    }
}

// =============================================================================
// Options
// =============================================================================

/// Per-call calculation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOptions {
    /// Multiply the result by a random factor in `[0.95, 1.05)`.
    pub add_noise: bool,

    /// Accepted for interface parity. Has no effect on the result.
    pub use_system_date: bool,
}

impl CalculationOptions {
    /// Deterministic options (no noise).
    pub const fn deterministic() -> Self {
        CalculationOptions {
            add_noise: false,
            use_system_date: false,
        }
    }

    /// Options with noise enabled.
    pub const fn with_noise() -> Self {
        CalculationOptions {
            add_noise: true,
            use_system_date: false,
        }
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Every intermediate value of one calculation, in step order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Miles per day (0 when days <= 0).
    pub efficiency: f64,

    pub location: Location,

    pub rates: PerDiemRate,

    /// Per-diem before the duration multiplier.
    pub per_diem_base: f64,

    pub duration_factor: f64,

    /// Per-diem after the duration multiplier.
    pub per_diem: f64,

    /// Tiered mileage before the efficiency multiplier.
    pub mileage_base: f64,

    pub efficiency_factor: f64,

    pub mileage: f64,

    pub receipt_adjustment: f64,

    pub cycle_factor: f64,

    /// `(per_diem + mileage + receipt_adjustment) * cycle_factor`.
    pub subtotal: f64,

    /// `days * 100`, present only when the low-effort cap is in force.
    pub low_effort_cap: Option<i64>,

    /// True when the cap was strictly lower than the subtotal and replaced it.
    pub cap_applied: bool,

    /// Noise multiplier, present only when noise was requested.
    pub noise_factor: Option<f64>,

    /// Amount before rounding.
    pub unrounded: f64,
}

impl Breakdown {
    /// Returns true when the result is the whole-dollar cap, untouched by
    /// noise.
    pub fn is_whole_dollar_cap(&self) -> bool {
        self.cap_applied && self.noise_factor.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_table_lookup() {
        assert_eq!(
            PerDiemRate::for_location(Location::Low),
            PerDiemRate {
                base_rate: 15.0,
                mie_rate: 5.0
            }
        );
        assert_eq!(Location::Medium.rates().daily(), 65.0);
        assert_eq!(Location::High.rates().daily(), 85.0);
    }

    #[test]
    fn test_rate_table_rows_match_their_location() {
        for (location, rates) in PER_DIEM_TABLE {
            assert_eq!(location.rates(), rates);
        }
    }

    #[test]
    fn test_travel_day_rate() {
        assert_eq!(Location::Low.rates().travel_day(), 18.75);
        assert_eq!(Location::Medium.rates().travel_day(), 61.25);
        assert_eq!(Location::High.rates().travel_day(), 80.0);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Low.to_string(), "Low");
        assert_eq!(Location::Medium.to_string(), "Medium");
        assert_eq!(Location::High.to_string(), "High");
    }

    #[test]
    fn test_location_serializes_as_name() {
        let json = serde_json::to_string(&Location::High).unwrap();
        assert_eq!(json, "\"High\"");
    }

    #[test]
    fn test_options_default_is_deterministic() {
        assert_eq!(CalculationOptions::default(), CalculationOptions::deterministic());
        assert!(CalculationOptions::with_noise().add_noise);
    }

    #[test]
    fn test_validated_input() {
        let input = TripInput::validated(3, 120.5, 45.0).unwrap();
        assert_eq!(input, TripInput::new(3, 120.5, 45.0));

        let err = TripInput::validated(-1, 120.5, 45.0).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));
    }
}
