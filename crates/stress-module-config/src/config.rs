// crates/stress-module-config/src/config.rs
// ============================================================================
// Module: Stress Module Configuration
// Description: Configuration loading and validation for the stress module.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, stress-module-items, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section and field is optional. An explicit path or the
//! `STRESS_MODULE_CONFIG` variable must name a readable file; only the
//! implicit default file may be absent, in which case defaults apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use stress_module_items::DEFAULT_SENTINEL_PATH;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "stress-module.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "STRESS_MODULE_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum host item timeout in seconds.
pub const MAX_ITEM_TIMEOUT_SECS: u64 = 30;
/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Stress module configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StressModuleConfig {
    /// Module behavior settings.
    #[serde(default)]
    pub module: ModuleConfig,
    /// Generator settings.
    #[serde(default)]
    pub random: RandomConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[module]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Path checked by `stress.file`.
    #[serde(default = "default_sentinel_path")]
    pub sentinel_path: String,
    /// Host item timeout in seconds; `0` means none.
    #[serde(default)]
    pub item_timeout_secs: u64,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            sentinel_path: default_sentinel_path(),
            item_timeout_secs: 0,
        }
    }
}

/// `[random]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomConfig {
    /// Fixed generator seed; absent seeds from the wall clock.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl StressModuleConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match resolve_path(path)? {
            ResolvedPath::Required(resolved) => Self::load_file(&resolved),
            ResolvedPath::Implicit(resolved) => {
                if resolved.exists() {
                    Self::load_file(&resolved)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parses configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, bounds-checks, and parses one config file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Validates all sections.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.module.validate()?;
        self.logging.validate()
    }
}

impl ModuleConfig {
    /// Validates the `[module]` section.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string("module.sentinel_path", &self.sentinel_path)?;
        if !Path::new(self.sentinel_path.trim()).is_absolute() {
            return Err(ConfigError::Invalid(
                "module.sentinel_path must be absolute".to_string(),
            ));
        }
        if self.item_timeout_secs > MAX_ITEM_TIMEOUT_SECS {
            return Err(ConfigError::Invalid(format!(
                "module.item_timeout_secs must be at most {MAX_ITEM_TIMEOUT_SECS}"
            )));
        }
        Ok(())
    }

    /// Returns the sentinel path as a filesystem path.
    #[must_use]
    pub fn sentinel_path(&self) -> PathBuf {
        PathBuf::from(self.sentinel_path.trim())
    }
}

impl LoggingConfig {
    /// Validates the `[logging]` section.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must be non-empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Config path after resolution.
enum ResolvedPath {
    /// Explicit or env-supplied path; must be readable.
    Required(PathBuf),
    /// Default file name; may be absent.
    Implicit(PathBuf),
}

/// Resolves the config path from argument, environment, or default name.
fn resolve_path(path: Option<&Path>) -> Result<ResolvedPath, ConfigError> {
    if let Some(path) = path {
        return Ok(ResolvedPath::Required(path.to_path_buf()));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ResolvedPath::Required(PathBuf::from(env_path)));
    }
    Ok(ResolvedPath::Implicit(PathBuf::from(DEFAULT_CONFIG_NAME)))
}

/// Enforces total length and per-component limits on the config path.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path-valued field.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Serde default for `module.sentinel_path`.
fn default_sentinel_path() -> String {
    DEFAULT_SENTINEL_PATH.to_string()
}

/// Serde default for `logging.filter`.
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
