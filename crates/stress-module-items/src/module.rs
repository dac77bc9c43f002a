// crates/stress-module-items/src/module.rs
// ============================================================================
// Module: Stress Module Lifecycle
// Description: Host-facing module value tying registry and generator together.
// Purpose: Provide init/query/shutdown entry points for a monitoring host.
// Dependencies: stress-module-core, thiserror, tracing
// ============================================================================

//! ## Overview
//! A [`StressModule`] only exists after [`StressModule::init`] has built the
//! item registry and seeded the generator, so no query can run against an
//! unseeded generator. Queries are synchronous and may arrive from several
//! threads. [`StressModule::shutdown`] consumes the module and releases nothing
//! beyond its own memory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use stress_module_core::ItemError;
use stress_module_core::ItemMetadata;
use stress_module_core::ItemProvider;
use stress_module_core::ItemRequest;
use stress_module_core::ItemValue;
use thiserror::Error;

use crate::handlers::ItemContext;
use crate::random::RandomGenerator;
use crate::registry::ItemRegistry;
use crate::registry::RegistryError;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Path checked by `stress.file` unless configured otherwise.
pub const DEFAULT_SENTINEL_PATH: &str = "/tmp/stress_file";

/// Module construction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSettings {
    /// Path checked by `stress.file`.
    pub sentinel_path: PathBuf,
    /// Fixed generator seed; `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            sentinel_path: PathBuf::from(DEFAULT_SENTINEL_PATH),
            seed: None,
        }
    }
}

/// Where the generator seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOrigin {
    /// Current wall-clock second.
    Clock,
    /// Seed from settings.
    Configured,
    /// Caller-supplied generator.
    Injected,
}

impl SeedOrigin {
    /// Returns a stable label for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Configured => "configured",
            Self::Injected => "injected",
        }
    }
}

/// Module initialization failures.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The item registry could not be built.
    #[error("item registry error: {0}")]
    Registry(#[from] RegistryError),
}

// ============================================================================
// SECTION: Stress Module
// ============================================================================

/// Initialized stress item provider.
///
/// # Invariants
/// - The generator is seeded exactly once, at construction.
/// - The registry holds exactly the built-in items.
#[derive(Debug)]
pub struct StressModule {
    /// Built-in item table.
    registry: ItemRegistry,
    /// Shared generator.
    random: RandomGenerator,
    /// Path checked by `stress.file`.
    sentinel_path: PathBuf,
    /// Seed provenance.
    seed_origin: SeedOrigin,
    /// Host item timeout in seconds; `0` means none.
    item_timeout: AtomicU64,
}

impl StressModule {
    /// Builds the registry and seeds the generator.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError`] when the item registry cannot be built.
    pub fn init(settings: ModuleSettings) -> Result<Self, ModuleError> {
        let (random, origin) = match settings.seed {
            Some(seed) => (RandomGenerator::from_seed(seed), SeedOrigin::Configured),
            None => (RandomGenerator::from_clock(), SeedOrigin::Clock),
        };
        Self::assemble(settings.sentinel_path, random, origin)
    }

    /// Builds the module around a caller-supplied generator.
    ///
    /// `settings.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError`] when the item registry cannot be built.
    pub fn with_generator(
        settings: ModuleSettings,
        random: RandomGenerator,
    ) -> Result<Self, ModuleError> {
        Self::assemble(settings.sentinel_path, random, SeedOrigin::Injected)
    }

    /// Shared constructor tail.
    fn assemble(
        sentinel_path: PathBuf,
        random: RandomGenerator,
        seed_origin: SeedOrigin,
    ) -> Result<Self, ModuleError> {
        let registry = ItemRegistry::with_builtin_items()?;
        tracing::info!(
            items = registry.len(),
            seed = seed_origin.as_str(),
            sentinel = %sentinel_path.display(),
            "stress module initialized"
        );
        Ok(Self {
            registry,
            random,
            sentinel_path,
            seed_origin,
            item_timeout: AtomicU64::new(0),
        })
    }

    /// Returns the item registry.
    #[must_use]
    pub const fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// Returns the path checked by `stress.file`.
    #[must_use]
    pub fn sentinel_path(&self) -> &Path {
        &self.sentinel_path
    }

    /// Returns where the generator seed came from.
    #[must_use]
    pub const fn seed_origin(&self) -> SeedOrigin {
        self.seed_origin
    }

    /// Records the host item timeout in seconds (`0` = none).
    pub fn set_item_timeout(&self, seconds: u64) {
        self.item_timeout.store(seconds, Ordering::Relaxed);
    }

    /// Returns the recorded host item timeout in seconds.
    #[must_use]
    pub fn item_timeout(&self) -> u64 {
        self.item_timeout.load(Ordering::Relaxed)
    }

    /// Dispatches one item query.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] when the key is unknown or the handler rejects
    /// the parameters.
    pub fn dispatch(&self, key: &str, params: &[String]) -> Result<ItemValue, ItemError> {
        let ctx = ItemContext::new(&self.random, &self.sentinel_path);
        self.registry.dispatch(key, params, &ctx)
    }

    /// Dispatches a parsed item request.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] when the key is unknown or the handler rejects
    /// the parameters.
    pub fn dispatch_request(&self, request: &ItemRequest) -> Result<ItemValue, ItemError> {
        self.dispatch(request.key().as_str(), request.params())
    }

    /// Shuts the module down.
    pub fn shutdown(self) {
        tracing::info!(items = self.registry.len(), "stress module shut down");
    }
}

impl ItemProvider for StressModule {
    fn item_list(&self) -> Vec<ItemMetadata> {
        self.registry.item_list()
    }

    fn query(&self, key: &str, params: &[String]) -> Result<ItemValue, ItemError> {
        self.dispatch(key, params)
    }
}
