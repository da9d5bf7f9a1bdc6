// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and response envelopes exchanged with processors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessorRequest {
    pub payload: Vec<u8>,
}

impl ProcessorRequest {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    NextPayload(Vec<u8>),
    Error(ErrorDetail),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessorResponse {
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ProcessorResponse {
    pub fn payload(payload: Vec<u8>, metadata: HashMap<String, String>) -> Self {
        Self {
            outcome: Some(Outcome::NextPayload(payload)),
            metadata,
        }
    }

    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            outcome: Some(Outcome::Error(ErrorDetail {
                code,
                message: message.into(),
            })),
            metadata: HashMap::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Error(_)))
    }

    /// Output payload, if the processor produced one.
    pub fn next_payload(&self) -> Option<&[u8]> {
        match &self.outcome {
            Some(Outcome::NextPayload(payload)) => Some(payload.as_slice()),
            _ => None,
        }
    }
}
