// crates/stress-module-items/src/lib.rs
// ============================================================================
// Module: Stress Module Items
// Description: Built-in stress items, random generator, and item registry.
// Purpose: Answer stress-test item queries for a monitoring host.
// Dependencies: stress-module-core, rand, time, tracing
// ============================================================================

//! ## Overview
//! This crate ships the built-in stress items (`stress.ping`, `stress.echo`,
//! `stress.file`, and the `stress.random*` family), the seeded
//! [`RandomGenerator`] behind the random items, and an [`ItemRegistry`] that
//! routes queries by item key. [`StressModule`] ties them together behind the
//! host lifecycle: initialize once, query many times, shut down.
//! Invariants:
//! - Queries are routed via [`ItemRegistry`] by exact item key.
//! - Handlers own their parameter validation; the registry never pre-validates.
//! - The generator is shared behind one lock and is never reseeded.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod handlers;
pub mod module;
pub mod random;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use handlers::ItemContext;
pub use module::DEFAULT_SENTINEL_PATH;
pub use module::ModuleError;
pub use module::ModuleSettings;
pub use module::SeedOrigin;
pub use module::StressModule;
pub use random::ALPHABET;
pub use random::RandomGenerator;
pub use random::SeededSource;
pub use registry::ItemHandler;
pub use registry::ItemRegistry;
pub use registry::ItemRegistryBuilder;
pub use registry::RegistryEntry;
pub use registry::RegistryError;
