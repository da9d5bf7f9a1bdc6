// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation events.
//!
//! This module contains message types for logging events related to:
//! * Duplicate or empty processor IDs
//! * Options set on processors that do not use them
//! * Validation lifecycle (start, completion, failure)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Duplicate processor ID found.
///
/// # Log Level
/// `error!` - Configuration error preventing startup
///
/// # Example
/// ```
/// use keyed_transformer::observability::messages::validation::DuplicateProcessorId;
///
/// let msg = DuplicateProcessorId {
///     processor_id: "shout",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateProcessorId<'a> {
    pub processor_id: &'a str,
}

impl Display for DuplicateProcessorId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate processor ID: '{}'", self.processor_id)
    }
}

impl StructuredLog for DuplicateProcessorId<'_> {
    fn log(&self) {
        tracing::error!(processor_id = self.processor_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "duplicate_processor_id",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}

/// A `function` was configured on a processor kind that ignores it.
///
/// # Log Level
/// `error!` - Configuration error preventing startup
pub struct UnusedFunction<'a> {
    pub processor_id: &'a str,
    pub processor_kind: &'a str,
    pub function: &'a str,
}

impl Display for UnusedFunction<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' of kind '{}' does not take a function, but '{}' was configured",
            self.processor_id, self.processor_kind, self.function
        )
    }
}

impl StructuredLog for UnusedFunction<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            processor_kind = self.processor_kind,
            function = self.function,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unused_function",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}

/// Configuration validation started.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ValidationStarted {
    pub processor_count: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting configuration validation for {} processors",
            self.processor_count
        )
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::debug!(processor_count = self.processor_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "validation",
            span_name = name,
            processor_count = self.processor_count,
        )
    }
}

/// Configuration validation completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use keyed_transformer::observability::messages::validation::ValidationCompleted;
///
/// let msg = ValidationCompleted {
///     processor_count: 2,
/// };
///
/// assert_eq!(msg.to_string(), "Configuration validation completed successfully for 2 processors");
/// ```
pub struct ValidationCompleted {
    pub processor_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation completed successfully for {} processors",
            self.processor_count
        )
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        tracing::info!(processor_count = self.processor_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "validation_completed",
            span_name = name,
            processor_count = self.processor_count,
        )
    }
}

/// Configuration validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}
