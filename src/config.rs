//! Tool configuration module.
//!
//! The default invocation reads no configuration at all: the classification
//! thresholds are the named constants in [`crate::imaging`]. A TOML file can be
//! passed explicitly with `--config` to override them; every key is optional,
//! so the file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [gray_key]
//! saturation_threshold = 30   # max-min below this counts as gray
//! brightness_white = 245      # gray brighter than this is kept
//! brightness_black = 20       # gray darker than this is kept
//!
//! [processing]
//! max_processes = 4           # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{BRIGHTNESS_BLACK, BRIGHTNESS_WHITE, GrayKeyThresholds, SATURATION_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from an explicit `--config` file.
///
/// All fields have defaults equal to the built-in constants. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Gray-key classification thresholds.
    pub gray_key: GrayKeyConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl ToolConfig {
    /// Validate config values are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gray_key.saturation_threshold == 0 {
            return Err(ConfigError::Validation(
                "gray_key.saturation_threshold must be at least 1".into(),
            ));
        }
        if self.gray_key.brightness_black > self.gray_key.brightness_white {
            return Err(ConfigError::Validation(
                "gray_key.brightness_black must not exceed gray_key.brightness_white".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Gray-key thresholds as they appear in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrayKeyConfig {
    pub saturation_threshold: u8,
    pub brightness_white: u8,
    pub brightness_black: u8,
}

impl Default for GrayKeyConfig {
    fn default() -> Self {
        Self {
            saturation_threshold: SATURATION_THRESHOLD,
            brightness_white: BRIGHTNESS_WHITE,
            brightness_black: BRIGHTNESS_BLACK,
        }
    }
}

impl GrayKeyConfig {
    pub fn thresholds(&self) -> GrayKeyThresholds {
        GrayKeyThresholds {
            saturation: self.saturation_threshold,
            white: self.brightness_white,
            black: self.brightness_black,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of worker threads for the pixel transforms.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse a TOML document into a validated config. Missing keys keep their defaults.
pub fn parse_config(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file, or the stock defaults when `path` is `None`.
///
/// A path that was given but cannot be read is an error, never a silent fallback.
pub fn load_config(path: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => Ok(ToolConfig::default()),
    }
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `--gen-config` CLI flag.
pub fn stock_config_toml() -> &'static str {
    r##"# alpha-key Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Pass this file explicitly with --config; it is never picked up implicitly.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Gray-key removal (default method)
# ---------------------------------------------------------------------------
[gray_key]
# A pixel counts as gray when max(R,G,B) - min(R,G,B) is below this value.
saturation_threshold = 30

# Gray pixels brighter than this are highlights and are kept.
brightness_white = 245

# Gray pixels darker than this are shadows/outlines and are kept.
brightness_black = 20

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum worker threads for the pixel transforms.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
