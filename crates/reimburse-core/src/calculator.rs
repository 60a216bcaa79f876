//! # Reimbursement Calculator
//!
//! The formula pipeline: ten ordered steps from trip figures to a rounded
//! amount.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TripInput (days, miles, receipts)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. efficiency = miles / days                                           │
//! │  2. location   = High | Low | Medium                                    │
//! │  3. per-diem   = table rates × days × duration factor                   │
//! │  4. mileage    = tiered rate × efficiency factor                        │
//! │  5. receipts   = adjustment built on per-diem                           │
//! │  6. cycle      = 0.85 for sustained low effort                          │
//! │  7. combine    = (per-diem + mileage + receipts) × cycle                │
//! │  8. cap        = min(…, days × 100) when efficiency < 50                │
//! │  9. noise      = × [0.95, 1.05) when requested                          │
//! │ 10. round      = 2 decimals, half-to-even                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Reimbursement { amount, breakdown }                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step is a pure function so it can be checked on its own. The
//! arithmetic is carried out in `f64` in the same order as the published
//! rules; reordering a sum changes the last bit of some results.
//!
//! ## Example
//! ```rust
//! use reimburse_core::calculator::calculate;
//!
//! assert_eq!(calculate(1, 10.0, 0.0, false), 34.0);
//! assert_eq!(calculate(5, 500.0, 600.0, false), 1075.48);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::Money;
use crate::noise::{noise_factor, NoiseSource, ThreadRngNoise};
use crate::types::{Breakdown, CalculationOptions, Location, PerDiemRate, TripInput};

pub use crate::money::round_to_cents;

// =============================================================================
// Constants
// =============================================================================

/// Efficiency above which a trip is High and mileage earns the top bonus.
pub const HIGH_EFFORT_EFFICIENCY: f64 = 200.0;

/// Efficiency below which a trip is Low and the per-day cap applies.
pub const LOW_EFFORT_EFFICIENCY: f64 = 50.0;

/// Efficiency below which long trips count as Low and cycle suppression
/// kicks in.
pub const COASTING_EFFICIENCY: f64 = 100.0;

/// Per-day ceiling for low-effort trips, in whole dollars.
pub const LOW_EFFORT_DAILY_CAP: i64 = 100;

/// Minimum miles before any mileage is reimbursed.
pub const MILEAGE_THRESHOLD: f64 = 50.0;

const FIRST_TIER_MILES: f64 = 100.0;
const SECOND_TIER_MILES: f64 = 500.0;
const FIRST_TIER_RATE: f64 = 0.70;
const SECOND_TIER_RATE: f64 = 0.60;
const THIRD_TIER_RATE: f64 = 0.50;

/// Receipts below this are ignored in favor of the per-diem.
pub const SMALL_RECEIPTS: f64 = 50.0;

const SHORT_TRIP_RECEIPTS: f64 = 500.0;
const SHORT_TRIP_MAX_DAYS: i64 = 6;
const RECEIPT_EXCESS_RATE: f64 = 0.15;

// =============================================================================
// Result
// =============================================================================

/// Outcome of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reimbursement {
    pub input: TripInput,

    /// Final amount, rounded to cents.
    pub amount: f64,

    pub breakdown: Breakdown,
}

impl Reimbursement {
    /// The amount as integer cents.
    pub fn money(&self) -> Money {
        Money::from_rounded_amount(self.amount)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Computes the reimbursement for one trip.
///
/// Noise, when requested, comes from the thread-local generator. Use
/// [`calculate_with`] or [`ReimbursementCalculator`] to control it.
pub fn calculate(days: i64, miles: f64, receipts: f64, add_noise: bool) -> f64 {
    let options = CalculationOptions {
        add_noise,
        ..CalculationOptions::default()
    };
    calculate_with(&TripInput::new(days, miles, receipts), options, &mut ThreadRngNoise).amount
}

/// Computes the reimbursement and its breakdown, drawing noise from the
/// given source.
///
/// The source is only consulted when `options.add_noise` is set.
pub fn calculate_with<N: NoiseSource>(
    input: &TripInput,
    options: CalculationOptions,
    noise: &mut N,
) -> Reimbursement {
    let efficiency = efficiency(input.days, input.miles);
    let location = classify_location(input, efficiency);
    let rates = location.rates();

    let per_diem_base = per_diem_base(input.days, rates);
    let duration_factor = duration_factor(input.days, location);
    let per_diem = per_diem_base * duration_factor;

    let mileage_base = mileage_base(input.miles);
    let efficiency_factor = efficiency_factor(efficiency, input.days);
    let mileage = mileage_base * efficiency_factor;

    let receipt_adjustment = receipt_adjustment(input.receipts, input.days, per_diem, efficiency);
    let cycle_factor = cycle_factor(location, efficiency);

    let subtotal = (per_diem + mileage + receipt_adjustment) * cycle_factor;

    let low_effort_cap = low_effort_cap(input.days, efficiency);
    let (mut unrounded, cap_applied) = match low_effort_cap {
        Some(cap) => {
            let capped = keep_smaller(subtotal, cap as f64);
            (capped, (cap as f64) < subtotal)
        }
        None => (subtotal, false),
    };

    let noise_factor = options.add_noise.then(|| noise_factor(noise.sample()));
    if let Some(factor) = noise_factor {
        unrounded *= factor;
    }

    let amount = round_to_cents(unrounded);

    debug!(
        days = input.days,
        miles = input.miles,
        receipts = input.receipts,
        %location,
        efficiency,
        cap_applied,
        noisy = options.add_noise,
        amount,
        "Reimbursement calculated"
    );

    Reimbursement {
        input: *input,
        amount,
        breakdown: Breakdown {
            efficiency,
            location,
            rates,
            per_diem_base,
            duration_factor,
            per_diem,
            mileage_base,
            efficiency_factor,
            mileage,
            receipt_adjustment,
            cycle_factor,
            subtotal,
            low_effort_cap,
            cap_applied,
            noise_factor,
            unrounded,
        },
    }
}

/// Calculator that owns its noise source.
///
/// ## Example
/// ```rust
/// use reimburse_core::calculator::ReimbursementCalculator;
/// use reimburse_core::noise::SeededNoise;
/// use reimburse_core::{CalculationOptions, TripInput};
///
/// let mut calculator = ReimbursementCalculator::with_noise_source(SeededNoise::new(7));
/// let trip = TripInput::new(5, 500.0, 600.0);
///
/// let exact = calculator.calculate(&trip, CalculationOptions::deterministic());
/// assert_eq!(exact.amount, 1075.48);
///
/// let noisy = calculator.calculate(&trip, CalculationOptions::with_noise());
/// assert!(noisy.amount >= 1021.70 && noisy.amount <= 1129.26);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReimbursementCalculator<N = ThreadRngNoise> {
    noise: N,
}

impl ReimbursementCalculator<ThreadRngNoise> {
    pub fn new() -> Self {
        ReimbursementCalculator {
            noise: ThreadRngNoise,
        }
    }
}

impl<N: NoiseSource> ReimbursementCalculator<N> {
    pub fn with_noise_source(noise: N) -> Self {
        ReimbursementCalculator { noise }
    }

    pub fn calculate(&mut self, input: &TripInput, options: CalculationOptions) -> Reimbursement {
        calculate_with(input, options, &mut self.noise)
    }
}

// =============================================================================
// Steps
// =============================================================================

/// Step 1: miles per day, or 0 when days is not positive.
#[inline]
pub fn efficiency(days: i64, miles: f64) -> f64 {
    if days > 0 {
        miles / days as f64
    } else {
        0.0
    }
}

/// Step 2: infers the location category. High takes priority over Low.
pub fn classify_location(input: &TripInput, efficiency: f64) -> Location {
    if efficiency > HIGH_EFFORT_EFFICIENCY || (input.miles > 800.0 && input.receipts > 1000.0) {
        Location::High
    } else if efficiency < LOW_EFFORT_EFFICIENCY
        || (input.days > 7 && efficiency < COASTING_EFFICIENCY)
    {
        Location::Low
    } else {
        Location::Medium
    }
}

/// Step 3a: per-diem before the duration multiplier.
///
/// Trips of two days or more pay the two travel days at base plus 75% of
/// M&IE and every other day at the full rate.
pub fn per_diem_base(days: i64, rates: PerDiemRate) -> f64 {
    if days >= 2 {
        rates.daily() * (days - 2) as f64 + rates.travel_day() * 2.0
    } else {
        rates.daily() * days as f64
    }
}

/// Step 3b: 5-day bonus, long-trip penalty.
pub fn duration_factor(days: i64, location: Location) -> f64 {
    if days == 5 {
        1.15
    } else if days > 7 {
        if location == Location::Low {
            0.40
        } else {
            0.80
        }
    } else {
        1.0
    }
}

/// Step 4a: tiered mileage. Nothing below 50 miles.
///
/// A NaN mileage fails the threshold test and earns nothing.
pub fn mileage_base(miles: f64) -> f64 {
    if miles >= MILEAGE_THRESHOLD {
        if miles <= FIRST_TIER_MILES {
            miles * FIRST_TIER_RATE
        } else if miles <= SECOND_TIER_MILES {
            FIRST_TIER_MILES * FIRST_TIER_RATE + (miles - FIRST_TIER_MILES) * SECOND_TIER_RATE
        } else {
            FIRST_TIER_MILES * FIRST_TIER_RATE
                + (SECOND_TIER_MILES - FIRST_TIER_MILES) * SECOND_TIER_RATE
                + (miles - SECOND_TIER_MILES) * THIRD_TIER_RATE
        }
    } else {
        0.0
    }
}

/// Step 4b: multiplier on mileage for high-effort trips.
///
/// The 0.90 arm can never match: any efficiency above 300 is already taken
/// by the first arm. It is kept so results stay identical to the published
/// rules.
pub fn efficiency_factor(efficiency: f64, days: i64) -> f64 {
    if efficiency > HIGH_EFFORT_EFFICIENCY {
        1.20
    } else if efficiency > COASTING_EFFICIENCY && efficiency <= HIGH_EFFORT_EFFICIENCY {
        1.15
    } else if efficiency > 300.0 && days > 1 {
        0.90
    } else {
        1.0
    }
}

/// Step 5: receipt adjustment.
///
/// ```text
/// receipts < 50               → per_diem
/// receipts <= 500, days <= 6  → min(per_diem × 0.8, receipts)
/// otherwise                   → per_diem + min(receipts − per_diem, 200|500) × 0.15
/// ```
///
/// The excess can be negative when receipts are below the per-diem, which
/// pulls the adjustment under the per-diem.
pub fn receipt_adjustment(receipts: f64, days: i64, per_diem: f64, efficiency: f64) -> f64 {
    if receipts < SMALL_RECEIPTS {
        per_diem
    } else if receipts <= SHORT_TRIP_RECEIPTS && days <= SHORT_TRIP_MAX_DAYS {
        keep_smaller(per_diem * 0.8, receipts)
    } else {
        let limit = if efficiency < COASTING_EFFICIENCY {
            200.0
        } else {
            500.0
        };
        let excess = keep_smaller(receipts - per_diem, limit);
        per_diem + excess * RECEIPT_EXCESS_RATE
    }
}

/// Step 6: suppression for sustained low effort.
pub fn cycle_factor(location: Location, efficiency: f64) -> f64 {
    if location == Location::Low && efficiency < COASTING_EFFICIENCY {
        0.85
    } else {
        1.0
    }
}

/// Step 8: the whole-dollar cap, when it is in force.
pub fn low_effort_cap(days: i64, efficiency: f64) -> Option<i64> {
    (efficiency < LOW_EFFORT_EFFICIENCY).then(|| days.saturating_mul(LOW_EFFORT_DAILY_CAP))
}

/// Keeps the left operand unless the right one is strictly smaller.
///
/// Unlike `f64::min`, a NaN on either side is not discarded, matching the
/// published comparison order.
#[inline]
fn keep_smaller(left: f64, right: f64) -> f64 {
    if right < left {
        right
    } else {
        left
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
