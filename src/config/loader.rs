// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_SHIFT, TOML_EXTENSION};
use crate::errors::{ConfigError, FailureStrategy, TextError};
use crate::text::Shift;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for a toolbox run.
///
/// Lists the text tools to run over one input, in order, together with the
/// toolbox-wide defaults. It is typically loaded from a YAML (or TOML) file.
///
/// # Fields
/// * `default_shift` - Caesar shift for cipher processors without their own (optional, defaults to 3)
/// * `failure_strategy` - How to handle processor failures (optional, defaults to FailFast)
/// * `processors` - The configured tools, run in declaration order
///
/// # Example
/// ```yaml
/// default_shift: 3
/// failure_strategy: continue_on_error
/// processors:
///   - id: frequency
///     impl_: word_frequency_counter
///   - id: secret
///     impl_: caesar_encrypt
///     options:
///       shift: 5
///   - id: plain
///     impl_: caesar_decrypt
///     depends_on: [secret]
///     options:
///       shift: 5
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_shift: Option<ShiftSetting>,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,
}

impl Config {
    /// The configured default shift, or the built-in one.
    pub fn default_shift(&self) -> Result<Shift, TextError> {
        match &self.default_shift {
            Some(setting) => setting.resolve(),
            None => Ok(Shift::new(DEFAULT_SHIFT)),
        }
    }
}

/// Configuration for a single text tool.
///
/// # Fields
/// * `id` - Unique identifier for this processor within the toolbox
/// * `impl_` - Local implementation name (see `textkit processors`)
/// * `depends_on` - At most one earlier processor whose output becomes this one's input
/// * `options` - Processor-specific settings
///
/// # Example
/// ```yaml
/// id: "secret"
/// impl_: "caesar_encrypt"
/// options:
///   shift: -4
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    pub id: String,
    pub impl_: Option<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub options: ProcessorOptions,
}

/// Processor-specific settings. Tools ignore the ones they do not use.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessorOptions {
    pub shift: Option<ShiftSetting>,
}

/// A shift as written in a config file: either a number or text to parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShiftSetting {
    Integer(i64),
    Text(String),
}

impl ShiftSetting {
    pub fn resolve(&self) -> Result<Shift, TextError> {
        match self {
            ShiftSetting::Integer(raw) => Ok(Shift::new(*raw)),
            ShiftSetting::Text(raw) => raw.parse(),
        }
    }
}

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// TOML for `.toml` files, YAML for anything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(TOML_EXTENSION) => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse a config from text in the given format
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, ConfigFormat::from_path(path))
}

/// Load and validate a config file
///
/// Every problem found is reported together in [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;

    Ok(cfg)
}
