// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Configuration file parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub format: &'a str,
    pub processor_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} configuration from {} with {} processors",
            self.format,
            self.path.display(),
            self.processor_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            format = self.format,
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config",
            span_name = name,
            path = %self.path.display(),
            format = self.format,
        )
    }
}

/// No config file was given, so the built-in configuration is in use.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DefaultConfigUsed {
    pub processor_count: usize,
}

impl Display for DefaultConfigUsed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No configuration file given, using built-in configuration with {} processors",
            self.processor_count
        )
    }
}

impl StructuredLog for DefaultConfigUsed {
    fn log(&self) {
        tracing::info!(processor_count = self.processor_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config", span_name = name, builtin = true)
    }
}
