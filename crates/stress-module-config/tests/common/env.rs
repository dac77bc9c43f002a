// crates/stress-module-config/tests/common/env.rs
// ============================================================================
// Module: Test Environment Helpers
// Description: Serialized wrappers for test-only process state mutation.
// Purpose: Run config resolution under a chosen env var and working directory.
// ============================================================================

#![allow(unsafe_code, reason = "Test harness mutates process env for configuration.")]

use std::env;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;

use stress_module_config::CONFIG_ENV_VAR;

/// Serializes tests that touch the process env or working directory.
static PROCESS_STATE: Mutex<()> = Mutex::new(());

/// Runs `body` with `CONFIG_ENV_VAR` set to `config` (or removed) and the
/// working directory switched to `cwd`, restoring both afterwards.
pub fn with_config_env<T>(config: Option<&Path>, cwd: &Path, body: impl FnOnce() -> T) -> T {
    let _guard = PROCESS_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    let previous_dir = env::current_dir().unwrap();
    match config {
        // SAFETY: PROCESS_STATE serializes every env mutation in this test binary.
        Some(path) => unsafe { env::set_var(CONFIG_ENV_VAR, path) },
        // SAFETY: PROCESS_STATE serializes every env mutation in this test binary.
        None => unsafe { env::remove_var(CONFIG_ENV_VAR) },
    }
    env::set_current_dir(cwd).unwrap();
    let outcome = body();
    env::set_current_dir(previous_dir).unwrap();
    // SAFETY: PROCESS_STATE serializes every env mutation in this test binary.
    unsafe { env::remove_var(CONFIG_ENV_VAR) };
    outcome
}
