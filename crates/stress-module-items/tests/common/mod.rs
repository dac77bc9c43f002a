// crates/stress-module-items/tests/common/mod.rs
// ============================================================================
// Module: Item Test Helpers
// Description: Scripted random source and module fixtures.
// Purpose: Pin exact generator outputs for handler and registry tests.
// ============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use stress_module_core::RandomSource;
use stress_module_items::ModuleSettings;
use stress_module_items::RandomGenerator;
use stress_module_items::StressModule;

/// Random source replaying scripted draws and recording requested bounds.
///
/// Exhausted queues yield `0`.
#[derive(Default)]
pub struct ScriptedSource {
    /// Raw draws for `next_raw`.
    pub raws: VecDeque<u32>,
    /// Offsets for `next_below` (reduced modulo the bound).
    pub offsets: VecDeque<u64>,
    /// Unit draws for `next_unit`.
    pub units: VecDeque<f64>,
    /// Bounds passed to `next_below`.
    pub bounds: Arc<Mutex<Vec<u64>>>,
}

impl RandomSource for ScriptedSource {
    fn next_raw(&mut self) -> u32 {
        self.raws.pop_front().unwrap_or(0)
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.bounds.lock().unwrap().push(bound);
        let offset = self.offsets.pop_front().unwrap_or(0);
        if bound == 0 { 0 } else { offset % bound }
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

/// Returns a source that yields the given offsets and a handle to the bounds log.
pub fn offsets_source(offsets: &[u64]) -> (ScriptedSource, Arc<Mutex<Vec<u64>>>) {
    let source = ScriptedSource {
        offsets: offsets.iter().copied().collect(),
        ..ScriptedSource::default()
    };
    let bounds = Arc::clone(&source.bounds);
    (source, bounds)
}

/// Returns params as owned strings.
pub fn params(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Builds a module with a fixed seed and the given sentinel path.
pub fn seeded_module(sentinel_path: &Path, seed: u64) -> StressModule {
    StressModule::init(ModuleSettings {
        sentinel_path: sentinel_path.to_path_buf(),
        seed: Some(seed),
    })
    .unwrap()
}

/// Builds a module over a scripted source.
pub fn scripted_module(sentinel_path: &Path, source: ScriptedSource) -> StressModule {
    StressModule::with_generator(
        ModuleSettings {
            sentinel_path: sentinel_path.to_path_buf(),
            seed: None,
        },
        RandomGenerator::new(source),
    )
    .unwrap()
}
