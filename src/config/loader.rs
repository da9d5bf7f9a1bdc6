// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{CONFIG_PATH_ENV, DEFAULT_LOG_LEVEL};
use crate::errors::ConfigError;
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};
use crate::transform::TextTransform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Lists the processors to register at startup and the logging defaults.
/// It is typically loaded from a YAML or TOML file.
///
/// # Fields
/// * `logging` - Logging options (optional, defaults to level `info`)
/// * `processors` - Processors to register, keyed by their `id`
///
/// # Example
/// ```yaml
/// logging:
///   level: debug
/// processors:
///   - id: shout
///     processor: keyed_transform
///     function: upper
///     timed: true
///   - id: mean
///     processor: average
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,
}

impl Config {
    /// Configuration used when no file is supplied: an uppercasing
    /// transformer (timed) and an averaging processor.
    pub fn builtin() -> Self {
        Self {
            logging: LoggingConfig::default(),
            processors: vec![
                ProcessorConfig {
                    id: "upper".to_string(),
                    processor: ProcessorKind::KeyedTransform,
                    name: None,
                    function: Some(TextTransform::Upper),
                    timed: true,
                },
                ProcessorConfig {
                    id: "average".to_string(),
                    processor: ProcessorKind::Average,
                    name: None,
                    function: None,
                    timed: false,
                },
            ],
        }
    }

    pub fn processor(&self, id: &str) -> Option<&ProcessorConfig> {
        self.processors.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration for a single registered processor.
///
/// # Fields
/// * `id` - Unique key the processor is registered and looked up under
/// * `processor` - Which processor implementation to build
/// * `name` - Label for keyed transformers (defaults to `id`)
/// * `function` - Transformation for keyed transformers (defaults to `upper`)
/// * `timed` - Wrap the processor so responses carry `process_time`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProcessorConfig {
    pub id: String,
    pub processor: ProcessorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<TextTransform>,
    #[serde(default)]
    pub timed: bool,
}

impl ProcessorConfig {
    /// Transformer label: `name` when set, otherwise the `id`.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Processor implementation selected by a [`ProcessorConfig`].
///
/// # Variants
/// * `KeyedTransform` - JSON array of strings in, JSON object of `item -> f(item)` out
/// * `Average` - JSON array of numbers in, their mean out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    KeyedTransform,
    Average,
}

impl ProcessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorKind::KeyedTransform => "keyed_transform",
            ProcessorKind::Average => "average",
        }
    }

    pub fn takes_function(&self) -> bool {
        matches!(self, ProcessorKind::KeyedTransform)
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk format of a config file, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    pub fn parse(&self, content: &str) -> Result<Config, ConfigError> {
        match self {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
        }
    }
}

/// Config path from the environment, if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = format.parse(&content)?;

    ConfigLoaded {
        path,
        format: format.as_str(),
        processor_count: cfg.processors.len(),
    }
    .log();

    Ok(cfg)
}

/// Load and validate a config file
///
/// Every validation problem is reported together in
/// [`ConfigError::Validation`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}
