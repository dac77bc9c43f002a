// crates/stress-module-config/tests/load_validation.rs
// ============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// ============================================================================

//! Config load validation tests for stress-module-config.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use std::fs;
use std::path::Path;

use stress_module_config::ConfigError;
use stress_module_config::DEFAULT_CONFIG_NAME;
use stress_module_config::StressModuleConfig;

use crate::common::TestResult;
use crate::common::assert_invalid;
use crate::common::config_file;
use crate::common::env::with_config_env;

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    assert_invalid(
        StressModuleConfig::load(Some(Path::new(&long_path))),
        "config path exceeds max length",
    )
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    assert_invalid(
        StressModuleConfig::load(Some(Path::new(&long_component))),
        "config path component too long",
    )
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let file = config_file(&vec![b'#'; 1_048_577])?;
    assert_invalid(StressModuleConfig::load(Some(file.path())), "config file exceeds size limit")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let file = config_file(&[0xFF, 0xFE, 0xFF])?;
    assert_invalid(StressModuleConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn load_reports_missing_explicit_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let missing = dir.path().join("absent.toml");
    match StressModuleConfig::load(Some(&missing)) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {other:?}")),
    }
}

#[test]
fn load_validates_file_contents() -> TestResult {
    let file = config_file(b"[module]\nitem_timeout_secs = 99\n")?;
    assert_invalid(StressModuleConfig::load(Some(file.path())), "item_timeout_secs")
}

#[test]
fn load_reads_valid_file() -> TestResult {
    let file = config_file(b"[random]\nseed = 7\n")?;
    let config = StressModuleConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.random.seed == Some(7) {
        Ok(())
    } else {
        Err("seed not loaded".to_string())
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

#[test]
fn env_var_names_config_when_no_path_is_given() -> TestResult {
    let file = config_file(b"[random]\nseed = 21\n")?;
    let cwd = tempfile::tempdir().map_err(|err| err.to_string())?;
    let config = with_config_env(Some(file.path()), cwd.path(), || StressModuleConfig::load(None))
        .map_err(|err| err.to_string())?;
    if config.random.seed == Some(21) {
        Ok(())
    } else {
        Err("env var config not loaded".to_string())
    }
}

#[test]
fn env_var_naming_missing_file_is_io_error() -> TestResult {
    let cwd = tempfile::tempdir().map_err(|err| err.to_string())?;
    let missing = cwd.path().join("absent.toml");
    match with_config_env(Some(&missing), cwd.path(), || StressModuleConfig::load(None)) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {other:?}")),
    }
}

#[test]
fn missing_default_file_falls_back_to_defaults() -> TestResult {
    let cwd = tempfile::tempdir().map_err(|err| err.to_string())?;
    let config = with_config_env(None, cwd.path(), || StressModuleConfig::load(None))
        .map_err(|err| err.to_string())?;
    if config == StressModuleConfig::default() {
        Ok(())
    } else {
        Err("expected default config".to_string())
    }
}

#[test]
fn default_file_in_working_directory_is_loaded() -> TestResult {
    let cwd = tempfile::tempdir().map_err(|err| err.to_string())?;
    fs::write(cwd.path().join(DEFAULT_CONFIG_NAME), "[module]\nitem_timeout_secs = 4\n")
        .map_err(|err| err.to_string())?;
    let config = with_config_env(None, cwd.path(), || StressModuleConfig::load(None))
        .map_err(|err| err.to_string())?;
    if config.module.item_timeout_secs == 4 {
        Ok(())
    } else {
        Err("default file not loaded".to_string())
    }
}

#[test]
fn explicit_path_wins_over_env_var() -> TestResult {
    let explicit = config_file(b"[random]\nseed = 1\n")?;
    let from_env = config_file(b"[random]\nseed = 2\n")?;
    let cwd = tempfile::tempdir().map_err(|err| err.to_string())?;
    let config = with_config_env(Some(from_env.path()), cwd.path(), || {
        StressModuleConfig::load(Some(explicit.path()))
    })
    .map_err(|err| err.to_string())?;
    if config.random.seed == Some(1) {
        Ok(())
    } else {
        Err("explicit path did not take precedence".to_string())
    }
}
