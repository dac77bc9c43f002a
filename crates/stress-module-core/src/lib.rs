// crates/stress-module-core/src/lib.rs
// ============================================================================
// Module: Stress Module Core
// Description: Item identifiers, request/result shapes, and provider interfaces.
// Purpose: Define the contract shared by item handlers and their hosts.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! `stress-module-core` defines the data shapes exchanged between a monitoring
//! host and the stress item provider: item keys, parsed item requests, typed
//! item values, and item failures. It also defines the two seams the rest of
//! the workspace plugs into: [`ItemProvider`] for hosts and [`RandomSource`]
//! for the pseudo-random engine behind the random items.
//! Invariants:
//! - Every query yields exactly one [`ItemValue`] or one [`ItemError`].
//! - Item keys use the restricted key alphabet checked by [`is_valid_item_key`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::identifiers::ItemKey;
pub use crate::core::identifiers::is_valid_item_key;
pub use crate::core::identifiers::is_valid_key_char;
pub use crate::core::item::ItemError;
pub use crate::core::item::ItemErrorKind;
pub use crate::core::item::ItemMetadata;
pub use crate::core::item::ItemValue;
pub use crate::core::item::ValueKind;
pub use crate::core::request::ItemRequest;
pub use crate::core::request::RequestParseError;
pub use crate::interfaces::ItemProvider;
pub use crate::interfaces::RAND_MAX;
pub use crate::interfaces::RandomSource;
