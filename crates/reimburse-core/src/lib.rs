//! # reimburse-core: Travel Reimbursement Rules
//!
//! Pure business logic for computing a travel reimbursement from trip
//! duration, miles traveled and total receipts. No I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reimbursement Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              calculate-reimbursement (apps/cli)                 │   │
//! │  │    args ──► config ──► parse ──► calculate ──► render          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ reimburse-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │calculator │  │   noise   │  │ validation│  │   │
//! │  │   │ TripInput │  │ 10 steps  │  │  sources  │  │  opt-in   │  │   │
//! │  │   │ Location  │  │ Breakdown │  │  factor   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS (except noise)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Trip input, location, rate table, breakdown
//! - [`calculator`] - The formula pipeline
//! - [`money`] - Cent rounding and the `Money` type
//! - [`noise`] - Injectable randomness for the optional noise step
//! - [`validation`] - Opt-in input checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Deterministic by default**: same input, same output, unless noise is
//!    requested
//! 2. **Bit-exact arithmetic**: `f64` steps in the published order
//! 3. **No hidden validation**: out-of-range inputs flow through the rules
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use reimburse_core::{calculate, calculate_with, CalculationOptions, Location, TripInput};
//! use reimburse_core::noise::FixedNoise;
//!
//! assert_eq!(calculate(1, 10.0, 0.0, false), 34.0);
//!
//! let trip = TripInput::new(3, 650.0, 1200.0);
//! let result = calculate_with(&trip, CalculationOptions::default(), &mut FixedNoise::floor());
//! assert_eq!(result.breakdown.location, Location::High);
//! assert_eq!(result.amount, 1027.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod noise;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{calculate, calculate_with, Reimbursement, ReimbursementCalculator};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use noise::NoiseSource;
pub use types::*;
