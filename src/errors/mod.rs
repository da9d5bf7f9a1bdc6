// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod payload;
mod processor_map;

pub use config::{ConfigError, ValidationError};
pub use payload::PayloadError;
pub use processor_map::ProcessorMapError;
