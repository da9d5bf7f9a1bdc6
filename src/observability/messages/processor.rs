// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution and lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Processor instantiation from configuration
//! * Processor execution lifecycle (start, completion, failure)
//! * Processor registry construction

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Processor execution started.
///
/// # Log Level
/// `debug!` - Per-request event
///
/// # Example
/// ```
/// use keyed_transformer::observability::messages::processor::ProcessorExecutionStarted;
///
/// let msg = ProcessorExecutionStarted {
///     processor_id: "keyed_transform",
///     input_size: 1024,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessorExecutionStarted<'a> {
    pub processor_id: &'a str,
    pub input_size: usize,
}

impl Display for ProcessorExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution started: input_size={} bytes",
            self.processor_id, self.input_size
        )
    }
}

impl StructuredLog for ProcessorExecutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor",
            span_name = name,
            processor_id = self.processor_id,
            input_size = self.input_size,
        )
    }
}

/// Processor execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use keyed_transformer::observability::messages::processor::ProcessorExecutionCompleted;
/// use std::time::Duration;
///
/// let msg = ProcessorExecutionCompleted {
///     processor_id: "keyed_transform",
///     input_size: 1024,
///     output_size: 2048,
///     duration: Duration::from_millis(10),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.processor_id, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_completed",
            span_name = name,
            processor_id = self.processor_id,
            duration = ?self.duration,
        )
    }
}

/// Processor execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use keyed_transformer::observability::messages::processor::ProcessorExecutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "not a JSON array");
/// let msg = ProcessorExecutionFailed {
///     processor_id: "average",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessorExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution failed: {}",
            self.processor_id, self.error
        )
    }
}

impl StructuredLog for ProcessorExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_failed",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}

/// Processor instantiation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ProcessorInstantiationFailed<'a> {
    pub processor_id: &'a str,
    pub processor_kind: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate {} processor '{}': {}",
            self.processor_kind, self.processor_id, self.reason
        )
    }
}

impl StructuredLog for ProcessorInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            processor_kind = self.processor_kind,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_instantiation",
            span_name = name,
            processor_id = self.processor_id,
            processor_kind = self.processor_kind,
        )
    }
}

/// Processor registry built from configuration.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProcessorMapBuilt {
    pub processor_count: usize,
    pub timed_count: usize,
}

impl Display for ProcessorMapBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered {} processors ({} timed)",
            self.processor_count, self.timed_count
        )
    }
}

impl StructuredLog for ProcessorMapBuilt {
    fn log(&self) {
        tracing::info!(
            processor_count = self.processor_count,
            timed_count = self.timed_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_map",
            span_name = name,
            processor_count = self.processor_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_message_format() {
        let msg = ProcessorExecutionCompleted {
            processor_id: "average",
            input_size: 9,
            output_size: 3,
            duration: Duration::from_millis(2),
        };

        assert_eq!(
            msg.to_string(),
            "Processor 'average' completed: input=9 bytes, output=3 bytes, duration=2ms"
        );
    }

    #[test]
    fn test_failed_message_includes_error() {
        let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let msg = ProcessorExecutionFailed {
            processor_id: "keyed_transform",
            error: &error,
        };

        assert_eq!(
            msg.to_string(),
            "Processor 'keyed_transform' execution failed: bad bytes"
        );
    }

    #[test]
    fn test_map_built_message_format() {
        let msg = ProcessorMapBuilt {
            processor_count: 3,
            timed_count: 1,
        };
        assert_eq!(msg.to_string(), "Registered 3 processors (1 timed)");
    }
}
