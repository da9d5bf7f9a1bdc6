// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two processors share an ID
    #[error("Duplicate processor ID: '{processor_id}'")]
    DuplicateProcessorId { processor_id: String },

    /// A processor ID is empty or only whitespace
    #[error("Processor at position {index} has an empty ID")]
    EmptyProcessorId { index: usize },

    /// A `function` is set on a processor kind that does not take one
    #[error("Processor '{processor_id}' of kind '{processor_kind}' does not take a function, but '{function}' was configured")]
    UnusedFunction {
        processor_id: String,
        processor_kind: String,
        function: String,
    },
}

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported config format for {0}: expected .yaml, .yml or .toml")]
    UnsupportedFormat(PathBuf),

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Validation(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
