// crates/stress-module-config/tests/config_defaults.rs
// ============================================================================
// Module: Config Defaults Tests
// Description: Default values and per-field validation.
// Purpose: Ensure omitted settings fall back and bad values fail closed.
// ============================================================================

//! Config defaults and field validation tests.

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

use stress_module_config::ConfigError;
use stress_module_config::DEFAULT_LOG_FILTER;
use stress_module_config::StressModuleConfig;
use stress_module_items::DEFAULT_SENTINEL_PATH;

use crate::common::TestResult;
use crate::common::assert_invalid;

#[test]
fn empty_document_uses_defaults() -> TestResult {
    let config = StressModuleConfig::from_toml("").map_err(|err| err.to_string())?;
    if config != StressModuleConfig::default() {
        return Err("empty document should equal defaults".to_string());
    }
    if config.module.sentinel_path != DEFAULT_SENTINEL_PATH
        || config.module.item_timeout_secs != 0
        || config.random.seed.is_some()
        || config.logging.filter != DEFAULT_LOG_FILTER
    {
        return Err("unexpected default values".to_string());
    }
    Ok(())
}

#[test]
fn full_document_is_parsed() -> TestResult {
    let config = StressModuleConfig::from_toml(
        r#"
[module]
sentinel_path = "/var/run/stress"
item_timeout_secs = 30

[random]
seed = 42

[logging]
filter = "stress_module_items=debug"
"#,
    )
    .map_err(|err| err.to_string())?;
    if config.module.sentinel_path() != std::path::Path::new("/var/run/stress") {
        return Err("sentinel path not applied".to_string());
    }
    if config.module.item_timeout_secs != 30 || config.random.seed != Some(42) {
        return Err("numeric settings not applied".to_string());
    }
    if config.logging.filter != "stress_module_items=debug" {
        return Err("log filter not applied".to_string());
    }
    Ok(())
}

#[test]
fn relative_sentinel_path_is_rejected() -> TestResult {
    assert_invalid(
        StressModuleConfig::from_toml("[module]\nsentinel_path = \"tmp/stress_file\"\n"),
        "module.sentinel_path must be absolute",
    )
}

#[test]
fn blank_sentinel_path_is_rejected() -> TestResult {
    assert_invalid(
        StressModuleConfig::from_toml("[module]\nsentinel_path = \"   \"\n"),
        "module.sentinel_path must be non-empty",
    )
}

#[test]
fn oversized_sentinel_component_is_rejected() -> TestResult {
    let content = format!("[module]\nsentinel_path = \"/tmp/{}\"\n", "a".repeat(300));
    assert_invalid(
        StressModuleConfig::from_toml(&content),
        "module.sentinel_path path component too long",
    )
}

#[test]
fn item_timeout_above_limit_is_rejected() -> TestResult {
    assert_invalid(
        StressModuleConfig::from_toml("[module]\nitem_timeout_secs = 31\n"),
        "module.item_timeout_secs must be at most 30",
    )
}

#[test]
fn empty_log_filter_is_rejected() -> TestResult {
    assert_invalid(
        StressModuleConfig::from_toml("[logging]\nfilter = \"\"\n"),
        "logging.filter must be non-empty",
    )
}

#[test]
fn unknown_fields_fail_to_parse() -> TestResult {
    match StressModuleConfig::from_toml("[module]\nsentinel = \"/tmp/x\"\n") {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}

#[test]
fn negative_seed_fails_to_parse() -> TestResult {
    assert_invalid(StressModuleConfig::from_toml("[random]\nseed = -1\n"), "config parse error")
}
