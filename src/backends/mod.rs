// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor backend implementations.
//!
//! A backend turns a [`ProcessorConfig`](crate::config::ProcessorConfig) into
//! something that implements the `Processor` trait. Only the local backend
//! exists: in-process Rust processors built on the `transform` core.
//!
//! ## Local Backend
//! - **Keyed transform**: JSON array of strings to a JSON object of
//!   `item -> f(item)`
//! - **Average**: JSON array of numbers to their mean
//! - **Timing**: wrapper that adds `process_time` to response metadata
//!
//! # Architecture
//!
//! ```text
//! Configuration → Factory → Processor Instance → ProcessorMap
//! ```
//!
//! # Example
//! ```rust
//! use keyed_transformer::backends::local::LocalProcessorFactory;
//! use keyed_transformer::config::{ProcessorConfig, ProcessorKind};
//! use keyed_transformer::traits::Processor;
//!
//! let config = ProcessorConfig {
//!     id: "uppercase".to_string(),
//!     processor: ProcessorKind::KeyedTransform,
//!     name: None,
//!     function: None,
//!     timed: false,
//! };
//!
//! let processor = LocalProcessorFactory::create_processor(&config)?;
//! assert_eq!(processor.name(), "keyed_transform");
//! # Ok::<(), keyed_transformer::errors::ProcessorMapError>(())
//! ```

pub mod local;
