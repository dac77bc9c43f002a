// crates/stress-module-core/src/core/item.rs
// ============================================================================
// Module: Item Results
// Description: Typed item values, item failures, and capability metadata.
// Purpose: Model the outcome of a single item query.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! An item query produces either an [`ItemValue`] or an [`ItemError`]. Values
//! are tagged by [`ValueKind`] so hosts can route short text and long text to
//! different storage. Failures carry the human-readable message reported back
//! to the host and are terminal for the query that produced them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::ItemKey;

// ============================================================================
// SECTION: Item Values
// ============================================================================

/// Successful item value.
///
/// # Invariants
/// - Exactly one variant is produced per successful query.
/// - `Str` is bounded near 255 characters by the host; `Text` by a larger host limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ItemValue {
    /// Unsigned 64-bit integer.
    Unsigned(u64),
    /// Floating-point number.
    Float(f64),
    /// Short text.
    Str(String),
    /// Long text.
    Text(String),
}

impl ItemValue {
    /// Returns the kind tag for this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Unsigned(_) => ValueKind::Unsigned,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Returns the unsigned value, if any.
    #[must_use]
    pub const fn as_unsigned(&self) -> Option<u64> {
        match self {
            Self::Unsigned(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the floating-point value, if any.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text payload of a short or long text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Str(text) | Self::Text(text) => Some(text.as_str()),
            Self::Unsigned(_) | Self::Float(_) => None,
        }
    }
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:.6}"),
            Self::Str(text) | Self::Text(text) => f.write_str(text),
        }
    }
}

/// Kind tag of an [`ItemValue`].
///
/// # Invariants
/// - Variants and labels are stable for host routing and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Unsigned 64-bit integer.
    Unsigned,
    /// Floating-point number.
    Float,
    /// Short text.
    Str,
    /// Long text.
    Text,
}

impl ValueKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::Float => "float",
            Self::Str => "str",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Item Errors
// ============================================================================

/// Item query failure.
///
/// # Invariants
/// - Messages are stable; hosts display them verbatim.
/// - A failure never affects later queries.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "detail", rename_all = "snake_case")]
pub enum ItemError {
    /// The handler received the wrong number of parameters.
    #[error("Invalid number of parameters.")]
    InvalidParameterCount,
    /// The requested numeric range is empty.
    #[error("Invalid range specified.")]
    InvalidRange,
    /// No handler is registered for the key.
    #[error("unknown item key: {0}")]
    UnknownKey(ItemKey),
}

impl ItemError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ItemErrorKind {
        match self {
            Self::InvalidParameterCount | Self::InvalidRange => ItemErrorKind::Validation,
            Self::UnknownKey(_) => ItemErrorKind::UnknownKey,
        }
    }
}

/// Classification of an [`ItemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemErrorKind {
    /// Parameter count or shape was rejected by the handler.
    Validation,
    /// The dispatch target does not exist.
    UnknownKey,
}

impl ItemErrorKind {
    /// Returns a stable label for the classification.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::UnknownKey => "unknown_key",
        }
    }
}

// ============================================================================
// SECTION: Capability Metadata
// ============================================================================

/// Capability entry advertised to the host for one item.
///
/// # Invariants
/// - `requires_params` is descriptive; handlers perform their own validation.
/// - `test_params` is documentation only and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Item key.
    pub key: ItemKey,
    /// Whether the item accepts parameters.
    pub requires_params: bool,
    /// Example parameters used by host test modes.
    pub test_params: String,
}

impl ItemMetadata {
    /// Returns the key string hosts use to query this item with its example
    /// parameters, e.g. `stress.random[1,1000]`.
    #[must_use]
    pub fn test_key(&self) -> String {
        if self.requires_params && !self.test_params.is_empty() {
            format!("{}[{}]", self.key, self.test_params)
        } else {
            self.key.to_string()
        }
    }
}
