//! Configuration file loading with precedence handling.

use crate::state::{DefaultExpansion, DEFAULT_MAX_SUGGESTIONS};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Components directory used when nothing else is configured.
pub const DEFAULT_COMPONENTS_DIR: &str = "src/components";

/// Debounce window used when nothing else is configured.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// `timeline_default` is neither "expanded" nor "collapsed".
    #[error("Invalid timeline_default {0:?}; expected \"expanded\" or \"collapsed\"")]
    InvalidTimelineDefault(String),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/adamui/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory, relative to the destination project, that receives components.
    #[serde(default)]
    pub components_dir: Option<PathBuf>,

    /// Cap on the number of suggestions shown by a search bar.
    #[serde(default)]
    pub max_suggestions: Option<usize>,

    /// Typing debounce window in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Initial timeline expansion: "expanded" or "collapsed".
    #[serde(default)]
    pub timeline_default: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Key binding overrides, `action = "key"`.
    #[serde(default)]
    pub keybindings: Option<BTreeMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory, relative to the install destination, that receives components.
    pub components_dir: PathBuf,
    /// Dropdown length used by the demo bars.
    pub max_suggestions: usize,
    /// Quiet period before a bar stops reporting typing.
    pub debounce: Duration,
    /// Initial expansion of timeline nodes.
    pub timeline_default: DefaultExpansion,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key binding overrides, applied on top of the defaults.
    pub keybindings: BTreeMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            components_dir: PathBuf::from(DEFAULT_COMPONENTS_DIR),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            timeline_default: DefaultExpansion::default(),
            log_file_path: default_log_path(),
            keybindings: BTreeMap::new(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/adamui/adamui.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("adamui").join("adamui.log")
    } else {
        PathBuf::from("adamui.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/adamui/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("adamui").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ADAMUI_CONFIG` environment variable
/// 3. Default path `~/.config/adamui/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("ADAMUI_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ADAMUI_COMPONENTS_DIR`: Override the components directory
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(dir) = std::env::var("ADAMUI_COMPONENTS_DIR") {
        if !dir.is_empty() {
            config.components_dir = PathBuf::from(dir);
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidTimelineDefault`] for an unrecognized
/// `timeline_default` value.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let timeline_default = match config.timeline_default {
        Some(raw) => DefaultExpansion::parse(&raw).ok_or(ConfigError::InvalidTimelineDefault(raw))?,
        None => defaults.timeline_default,
    };

    Ok(ResolvedConfig {
        components_dir: config.components_dir.unwrap_or(defaults.components_dir),
        // A zero cap would make the autocomplete bar useless; treat it as unset.
        max_suggestions: config
            .max_suggestions
            .filter(|&max| max > 0)
            .unwrap_or(defaults.max_suggestions),
        debounce: config
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce),
        timeline_default,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config.keybindings.unwrap_or(defaults.keybindings),
    })
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    components_dir_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(dir) = components_dir_override {
        config.components_dir = dir;
    }

    config
}

/// Run the full precedence chain: file, env vars, then CLI.
///
/// # Errors
///
/// Propagates [`ConfigError`] from loading or merging the file.
pub fn resolve(
    config_path: Option<PathBuf>,
    components_dir_override: Option<PathBuf>,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file)?;
    Ok(apply_cli_overrides(
        apply_env_overrides(merged),
        components_dir_override,
    ))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
