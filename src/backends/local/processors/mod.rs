// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod average;
pub mod keyed_transform;
pub mod timed;

pub use average::*;
pub use keyed_transform::*;
pub use timed::*;

use serde::de::DeserializeOwned;

use crate::errors::PayloadError;
use crate::observability::messages::{processor::ProcessorExecutionFailed, StructuredLog};
use crate::payload::ProcessorResponse;

/// Decode a UTF-8 JSON payload.
fn decode_json<T: DeserializeOwned>(payload: Vec<u8>) -> Result<T, PayloadError> {
    let text = String::from_utf8(payload)?;
    Ok(serde_json::from_str(&text)?)
}

/// Log the failure and turn it into an error response.
fn failure_response(processor_id: &str, error: PayloadError) -> ProcessorResponse {
    ProcessorExecutionFailed {
        processor_id,
        error: &error,
    }
    .log();

    ProcessorResponse::error(error.code(), error.to_string())
}
