// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic and operational log lines are built from message structs that
//! implement `Display` and [`messages::StructuredLog`], so the wording of a
//! log line lives next to its fields instead of being scattered through the
//! code as format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::config` - Configuration loading
//! * `messages::processor` - Processor execution and lifecycle events
//! * `messages::transform` - Mappings and averages produced by the core
//! * `messages::validation` - Configuration validation warnings and errors
//!
//! # Usage
//!
//! ```rust
//! use keyed_transformer::observability::messages::{processor::ProcessorExecutionFailed, StructuredLog};
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ProcessorExecutionFailed {
//!     processor_id: "keyed_transform",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_level` when it is set and parses. Calling
/// this more than once is harmless; later calls leave the first subscriber
/// in place.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::consts::DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("debug");
        init_tracing("not a valid directive [[");
        tracing::info!("still logging after repeated init");
    }
}
