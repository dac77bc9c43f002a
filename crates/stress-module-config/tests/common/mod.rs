// crates/stress-module-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation suites.
// Purpose: Keep fixtures and error assertions uniform across suites.
// ============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

pub mod env;

use std::io::Write;

use stress_module_config::ConfigError;
use stress_module_config::StressModuleConfig;
use tempfile::NamedTempFile;

/// Result type for fallible tests.
pub type TestResult = Result<(), String>;

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_invalid(result: Result<StressModuleConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

/// Writes `content` to a fresh temporary file.
pub fn config_file(content: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content).map_err(|err| err.to_string())?;
    Ok(file)
}
