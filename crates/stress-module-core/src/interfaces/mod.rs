// crates/stress-module-core/src/interfaces/mod.rs
// ============================================================================
// Module: Stress Module Interfaces
// Description: Backend-agnostic interfaces for item providers and randomness.
// Purpose: Define the contract surfaces hosts and generators plug into.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces decouple hosts from the item provider and the item provider from
//! its pseudo-random engine. Production code backs [`RandomSource`] with a
//! seeded engine; tests inject scripted sources to pin exact outputs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::item::ItemError;
use crate::core::item::ItemMetadata;
use crate::core::item::ItemValue;

// ============================================================================
// SECTION: Random Source
// ============================================================================

/// Largest value returned by [`RandomSource::next_raw`].
pub const RAND_MAX: u32 = 2_147_483_647;

/// Source of raw pseudo-random draws.
///
/// # Invariants
/// - `next_raw` returns values in `0..=RAND_MAX`.
/// - `next_below(bound)` returns values in `0..bound`, or `0` when `bound` is `0`.
/// - `next_unit` returns values in `[0.0, 1.0)`.
pub trait RandomSource {
    /// Returns a raw draw in `0..=RAND_MAX`.
    fn next_raw(&mut self) -> u32;

    /// Returns a uniform draw in `0..bound`.
    fn next_below(&mut self, bound: u64) -> u64;

    /// Returns a uniform draw in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}

// ============================================================================
// SECTION: Item Provider
// ============================================================================

/// Host-facing item provider.
pub trait ItemProvider {
    /// Returns the capability listing for every supported item.
    fn item_list(&self) -> Vec<ItemMetadata>;

    /// Resolves an item query into a value.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] when the key is unknown or the handler rejects the
    /// parameters.
    fn query(&self, key: &str, params: &[String]) -> Result<ItemValue, ItemError>;
}
