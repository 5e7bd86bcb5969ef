//! Tool configuration.
//!
//! The empirical constants of the pipeline and the decoder's memory cap live
//! here so they can be tuned without a rebuild. Everything has a default; a config file only
//! needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [copy]
//! small_file_threshold = 150000  # Bytes; smaller files that fit are copied as-is
//!
//! [jpeg]
//! quality = 85                   # JPEG quality (1-100); --quality overrides
//!
//! [decode]
//! # max_alloc_bytes = 536870912  # Cap on decode memory; unset means no cap
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{DEFAULT_SMALL_FILE_THRESHOLD, Quality};
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

/// Tool configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Fast-path copy settings.
    pub copy: CopyConfig,
    /// JPEG encoder settings.
    pub jpeg: JpegConfig,
    /// Decoder resource limits.
    pub decode: DecodeConfig,
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.jpeg.quality) {
            return Err(ConfigError::Validation(
                "jpeg.quality must be 1-100".into(),
            ));
        }
        if self.decode.max_alloc_bytes == Some(0) {
            return Err(ConfigError::Validation(
                "decode.max_alloc_bytes must be positive; omit it for no cap".into(),
            ));
        }
        Ok(())
    }

    pub fn quality(&self) -> Quality {
        Quality::new(self.jpeg.quality)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyConfig {
    /// Files below this many bytes that already fit the bounds are copied
    /// verbatim. `0` disables the size-based copy.
    pub small_file_threshold: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            small_file_threshold: DEFAULT_SMALL_FILE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JpegConfig {
    pub quality: u8,
}

impl Default for JpegConfig {
    fn default() -> Self {
        Self {
            quality: Quality::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeConfig {
    /// Largest buffer a single decode may allocate, in bytes. Unset decodes
    /// any size the machine can hold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_alloc_bytes: Option<u64>,
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`, or the stock defaults when `None`.
pub fn load_config(path: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => Ok(ToolConfig::default()),
    }
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Printed by `--gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# imgfit configuration
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Fast-path copy
# ---------------------------------------------------------------------------
[copy]
# When the output format equals the input format and the image already fits
# inside the requested bounds, files smaller than this many bytes are copied
# verbatim instead of being re-encoded. 0 disables this shortcut (a request
# with no bounds at all is still copied).
small_file_threshold = 150000

# ---------------------------------------------------------------------------
# JPEG output
# ---------------------------------------------------------------------------
[jpeg]
# Encoder quality, 1-100. Overridden by --quality.
quality = 85

# ---------------------------------------------------------------------------
# Decoding
# ---------------------------------------------------------------------------
[decode]
# Largest buffer one decode may allocate, in bytes. Images needing more fail
# with openImage. Unset means no cap.
# max_alloc_bytes = 536870912
"##
}
