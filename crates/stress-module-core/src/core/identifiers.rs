// crates/stress-module-core/src/core/identifiers.rs
// ============================================================================
// Module: Item Identifiers
// Description: Opaque item key type and key alphabet checks.
// Purpose: Provide a strongly typed, serializable item key with a stable wire form.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Item keys name the metrics a provider answers, for example `stress.ping`.
//! Keys serialize as plain strings. The [`ItemKey`] type itself applies no
//! validation; registries and request parsers check keys with
//! [`is_valid_item_key`] at their construction boundaries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Borrow;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Key Alphabet
// ============================================================================

/// Returns true when `ch` may appear in an item key.
#[must_use]
pub const fn is_valid_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-')
}

/// Returns true when `key` is non-empty and uses only the key alphabet.
#[must_use]
pub fn is_valid_item_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_valid_key_char)
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Item key identifying a single metric.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Creates a new item key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for ItemKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
