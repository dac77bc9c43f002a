// crates/stress-module-items/src/registry.rs
// ============================================================================
// Module: Item Registry
// Description: Immutable key-to-handler table for stress items.
// Purpose: Advertise supported items and route queries by item key.
// Dependencies: stress-module-core, thiserror, tracing
// ============================================================================

//! ## Overview
//! The item registry is built once through [`ItemRegistryBuilder`], which
//! rejects malformed and duplicate keys, and is immutable afterwards. Dispatch
//! is an exact key lookup followed by a direct handler call; the outcome is
//! returned untouched. The `requires_params` flag is advertised to hosts but
//! never enforced here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use stress_module_core::ItemError;
use stress_module_core::ItemKey;
use stress_module_core::ItemMetadata;
use stress_module_core::ItemValue;
use stress_module_core::is_valid_item_key;
use thiserror::Error;

use crate::handlers;
use crate::handlers::ItemContext;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Handler bound to an item key.
pub type ItemHandler = fn(&[String], &ItemContext<'_>) -> Result<ItemValue, ItemError>;

/// Built-in items: key, handler, example parameters.
const BUILTIN_ITEMS: [(&str, ItemHandler, &str); 8] = [
    ("stress.ping", handlers::ping, "anything"),
    ("stress.echo", handlers::echo, "a message"),
    ("stress.file", handlers::file_exists, "anything"),
    ("stress.random", handlers::random_range, "1,1000"),
    ("stress.random.int", handlers::random_int, "anything"),
    ("stress.random.double", handlers::random_double, "anything"),
    ("stress.random.str", handlers::random_str, "anything"),
    ("stress.random.txt", handlers::random_txt, "anything"),
];

/// Registry construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The key is already bound to a handler.
    #[error("item key already registered: {0}")]
    DuplicateKey(ItemKey),
    /// The key is empty or uses characters outside the key alphabet.
    #[error("invalid item key: '{0}'")]
    InvalidKey(String),
}

/// One registry row.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// Advertised capability metadata.
    metadata: ItemMetadata,
    /// Bound handler.
    handler: ItemHandler,
}

impl RegistryEntry {
    /// Returns the advertised metadata.
    #[must_use]
    pub const fn metadata(&self) -> &ItemMetadata {
        &self.metadata
    }

    /// Returns the item key.
    #[must_use]
    pub const fn key(&self) -> &ItemKey {
        &self.metadata.key
    }

    /// Invokes the bound handler.
    ///
    /// # Errors
    ///
    /// Returns the handler's [`ItemError`] unchanged.
    pub fn invoke(&self, params: &[String], ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
        (self.handler)(params, ctx)
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Collects registry entries before the registry is frozen.
#[derive(Debug, Default)]
pub struct ItemRegistryBuilder {
    /// Entries in registration order.
    entries: Vec<RegistryEntry>,
    /// Key to entry position.
    index: BTreeMap<ItemKey, usize>,
}

impl ItemRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the key is malformed or already bound.
    pub fn register(
        &mut self,
        key: &str,
        requires_params: bool,
        handler: ItemHandler,
        test_params: &str,
    ) -> Result<&mut Self, RegistryError> {
        if !is_valid_item_key(key) {
            return Err(RegistryError::InvalidKey(key.to_string()));
        }
        let key = ItemKey::new(key);
        if self.index.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(RegistryEntry {
            metadata: ItemMetadata {
                key,
                requires_params,
                test_params: test_params.to_string(),
            },
            handler,
        });
        Ok(self)
    }

    /// Registers the built-in stress items.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when a built-in key collides with an
    /// already registered key.
    pub fn register_builtin_items(&mut self) -> Result<&mut Self, RegistryError> {
        for (key, handler, test_params) in BUILTIN_ITEMS {
            self.register(key, true, handler, test_params)?;
        }
        Ok(self)
    }

    /// Freezes the collected entries into a registry.
    #[must_use]
    pub fn build(self) -> ItemRegistry {
        ItemRegistry {
            entries: self.entries,
            index: self.index,
        }
    }
}

// ============================================================================
// SECTION: Item Registry
// ============================================================================

/// Immutable item registry.
///
/// # Invariants
/// - Item keys are unique and well formed.
/// - Listing order is registration order.
#[derive(Debug)]
pub struct ItemRegistry {
    /// Entries in registration order.
    entries: Vec<RegistryEntry>,
    /// Key to entry position.
    index: BTreeMap<ItemKey, usize>,
}

impl ItemRegistry {
    /// Returns a builder for a custom registry.
    #[must_use]
    pub fn builder() -> ItemRegistryBuilder {
        ItemRegistryBuilder::new()
    }

    /// Creates a registry holding exactly the built-in stress items.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the built-in table is inconsistent.
    pub fn with_builtin_items() -> Result<Self, RegistryError> {
        let mut builder = ItemRegistryBuilder::new();
        builder.register_builtin_items()?;
        Ok(builder.build())
    }

    /// Returns all entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Returns the capability listing.
    #[must_use]
    pub fn item_list(&self) -> Vec<ItemMetadata> {
        self.entries.iter().map(|entry| entry.metadata.clone()).collect()
    }

    /// Returns the entry bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.index.get(key).and_then(|position| self.entries.get(*position))
    }

    /// Returns the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `key` and invokes its handler with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::UnknownKey`] when no handler is bound to `key`,
    /// otherwise the handler's own [`ItemError`].
    pub fn dispatch(
        &self,
        key: &str,
        params: &[String],
        ctx: &ItemContext<'_>,
    ) -> Result<ItemValue, ItemError> {
        let Some(entry) = self.get(key) else {
            tracing::warn!(item = key, "unknown item key");
            return Err(ItemError::UnknownKey(ItemKey::new(key)));
        };
        tracing::debug!(item = key, params = params.len(), "dispatching item query");
        let outcome = entry.invoke(params, ctx);
        if let Err(err) = &outcome {
            tracing::debug!(item = key, error = %err, "item query failed");
        }
        outcome
    }
}
