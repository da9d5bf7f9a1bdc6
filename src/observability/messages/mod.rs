// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its level with fields attached.
//!
//! # Organization
//!
//! * `config` - Configuration loading
//! * `processor` - Processor execution and lifecycle events
//! * `transform` - Mapping and average results
//! * `validation` - Configuration validation warnings and errors
//!
//! # Usage Pattern
//!
//! ```rust
//! use keyed_transformer::observability::messages::{transform::MappingProduced, StructuredLog};
//!
//! let msg = MappingProduced {
//!     transformer: "shouter",
//!     function: "upper",
//!     item_count: 3,
//!     key_count: 2,
//! };
//!
//! let span = msg.span("transform");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod processor;
pub mod transform;
pub mod validation;

/// Emit a message at its designated level, with its fields as structured data.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
