// crates/stress-module-items/src/random.rs
// ============================================================================
// Module: Random Generator
// Description: Seeded pseudo-random engine and the draw algorithms built on it.
// Purpose: Produce bounded integers, legacy-formula reals, and alphanumeric strings.
// Dependencies: stress-module-core, rand, time
// ============================================================================

//! ## Overview
//! [`RandomGenerator`] owns one [`RandomSource`] behind a mutex and implements
//! the three draw algorithms the random items need. The source is seeded once
//! (from wall-clock seconds or an explicit seed) and never reseeded.
//! Invariants:
//! - `uniform_int` is inclusive on both ends.
//! - `uniform_real` computes `low + raw / (high - low + 1)` with `raw` in
//!   `0..=RAND_MAX`; the result is not a uniform draw over `[low, high)`.
//! - `random_string(n)` returns exactly `n` characters from [`ALPHABET`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use stress_module_core::RAND_MAX;
use stress_module_core::RandomSource;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Alphabet used for random strings: digits, lowercase, then uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphabet size as a float for index scaling.
const ALPHABET_LEN: f64 = 62.0;

// ============================================================================
// SECTION: Seeded Source
// ============================================================================

/// [`RandomSource`] backed by a seeded standard engine.
pub struct SeededSource {
    /// Underlying engine.
    rng: StdRng,
}

impl SeededSource {
    /// Creates a source from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_raw(&mut self) -> u32 {
        self.rng.gen_range(0..=RAND_MAX)
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

// ============================================================================
// SECTION: Random Generator
// ============================================================================

/// Shared pseudo-random generator for item handlers.
///
/// # Invariants
/// - All draws go through a single lock; concurrent callers are serialized.
/// - A poisoned lock is recovered; draws never fail.
pub struct RandomGenerator {
    /// Locked source of raw draws.
    source: Mutex<Box<dyn RandomSource + Send>>,
}

impl RandomGenerator {
    /// Creates a generator over the given source.
    #[must_use]
    pub fn new(source: impl RandomSource + Send + 'static) -> Self {
        Self {
            source: Mutex::new(Box::new(source)),
        }
    }

    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SeededSource::from_seed(seed))
    }

    /// Creates a generator seeded from the current wall-clock second.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }

    /// Draws an integer uniformly from `low..=high`.
    ///
    /// Returns `low` when the range is empty.
    #[must_use]
    pub fn uniform_int(&self, low: i32, high: i32) -> i64 {
        let low = i64::from(low);
        let Ok(width) = u64::try_from(i64::from(high) - low + 1) else {
            return low;
        };
        let offset = self.lock().next_below(width);
        low + i64::try_from(offset).unwrap_or_default()
    }

    /// Computes `low + raw / (high - low + 1)` from one raw draw.
    #[must_use]
    pub fn uniform_real(&self, low: f64, high: f64) -> f64 {
        let raw = f64::from(self.lock().next_raw());
        low + raw / (high - low + 1.0)
    }

    /// Returns `length` characters drawn independently from [`ALPHABET`].
    #[must_use]
    pub fn random_string(&self, length: usize) -> String {
        let mut source = self.lock();
        (0..length).map(|_| alphabet_char(source.next_unit())).collect()
    }

    /// Locks the source, recovering from poisoning.
    fn lock(&self) -> MutexGuard<'_, Box<dyn RandomSource + Send>> {
        self.source.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for RandomGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomGenerator").finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the current Unix time in whole seconds, or `0` before the epoch.
#[must_use]
pub fn clock_seed() -> u64 {
    u64::try_from(OffsetDateTime::now_utc().unix_timestamp()).unwrap_or_default()
}

/// Maps a unit draw to an alphabet character via `floor(unit * 62)`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Index is the floor of a clamped unit draw scaled by the alphabet size."
)]
fn alphabet_char(unit: f64) -> char {
    let index = (unit.clamp(0.0, 1.0) * ALPHABET_LEN).floor() as usize;
    char::from(ALPHABET[index.min(ALPHABET.len() - 1)])
}
