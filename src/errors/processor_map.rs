// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor map creation and processor instantiation.

use crate::config::ProcessorKind;
use thiserror::Error;

/// Errors that can occur during processor map creation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessorMapError {
    /// Failed to create a processor from configuration
    #[error("Failed to create {kind} processor '{processor_id}': {reason}")]
    ProcessorCreationFailed {
        processor_id: String,
        kind: ProcessorKind,
        reason: String,
    },

    /// Two processors were registered under the same ID
    #[error("Processor '{processor_id}' is already registered")]
    DuplicateProcessor { processor_id: String },
}
