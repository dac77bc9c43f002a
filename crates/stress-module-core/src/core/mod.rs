// crates/stress-module-core/src/core/mod.rs
// ============================================================================
// Module: Stress Module Core Types
// Description: Identifier, request, and result types for item queries.
// Purpose: Group the plain data shapes used across the workspace.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Plain data types for item queries. Nothing in this module performs I/O or
//! draws random numbers.

pub mod identifiers;
pub mod item;
pub mod request;
