//! # Error Types
//!
//! Domain-specific error types for reimburse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  reimburse-core errors (this file)                                     │
//! │  ├── CoreError        - Noise source construction errors               │
//! │  └── ValidationError  - Opt-in input validation failures               │
//! │                                                                         │
//! │  reimburse-cli errors (app)                                            │
//! │  └── CliError         - Usage, parse and output failures (exit 1)      │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → stderr                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculation itself never fails. Errors only come from optional
//! validation and from constructing noise sources with bad parameters.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A fixed noise sample outside `[0, 1)`.
    ///
    /// ## When This Occurs
    /// - Building a `FixedNoise` for tests or replays with a sample that
    ///   would push the noise factor outside `[0.95, 1.05)`
    #[error("Noise sample {sample} is outside [0, 1)")]
    NoiseSampleOutOfRange { sample: f64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced when a caller opts into validation; the default pipeline
/// accepts any numeric input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative, got {value}")]
    MustBeNonNegative { field: String, value: f64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: String, value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
