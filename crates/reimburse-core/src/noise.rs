//! # Noise Sources
//!
//! Randomness for the optional noise step, behind a trait so tests can pin
//! it down.
//!
//! ```text
//! sample ∈ [0, 1)  ──►  noise_factor = 0.95 + sample × 0.10  ∈ [0.95, 1.05)
//! ```
//!
//! | Source           | Use                                        |
//! |------------------|--------------------------------------------|
//! | `ThreadRngNoise` | default, thread-local generator            |
//! | `SeededNoise`    | reproducible sequences (tests, audits)     |
//! | `FixedNoise`     | a single constant sample                   |

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, CoreResult};

/// Lowest noise multiplier.
pub const NOISE_FLOOR: f64 = 0.95;

/// Width of the noise band.
pub const NOISE_SPAN: f64 = 0.10;

/// Maps a sample in `[0, 1)` to a multiplier in `[0.95, 1.05)`.
#[inline]
pub fn noise_factor(sample: f64) -> f64 {
    NOISE_FLOOR + sample * NOISE_SPAN
}

/// A source of uniform samples in `[0, 1)`.
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

// =============================================================================
// Thread RNG
// =============================================================================

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn sample(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

// =============================================================================
// Seeded RNG
// =============================================================================

/// Deterministic sequence from a seed.
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        SeededNoise {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

// =============================================================================
// Fixed Sample
// =============================================================================

/// Always returns the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise(f64);

impl FixedNoise {
    /// Creates a fixed source. The sample must lie in `[0, 1)`.
    ///
    /// ## Example
    /// ```rust
    /// use reimburse_core::noise::FixedNoise;
    ///
    /// assert!(FixedNoise::new(0.5).is_ok());
    /// assert!(FixedNoise::new(1.0).is_err());
    /// ```
    pub fn new(sample: f64) -> CoreResult<Self> {
        if !(0.0..1.0).contains(&sample) {
            return Err(CoreError::NoiseSampleOutOfRange { sample });
        }
        Ok(FixedNoise(sample))
    }

    /// The zero sample: factor 0.95.
    pub const fn floor() -> Self {
        FixedNoise(0.0)
    }
}

impl NoiseSource for FixedNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
