// crates/stress-module-config/src/lib.rs
// ============================================================================
// Module: Stress Module Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for stress-module.toml semantics.
// Dependencies: serde, stress-module-items, thiserror, toml
// ============================================================================

//! ## Overview
//! `stress-module-config` defines the configuration model for the stress
//! module host harness: sentinel path, item timeout, generator seed, and log
//! filter. Loading is strict and fail-closed; a missing default file falls
//! back to built-in defaults.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
