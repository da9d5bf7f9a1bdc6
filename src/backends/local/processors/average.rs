// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Instant;

use super::{decode_json, failure_response};
use crate::errors::PayloadError;
use crate::observability::messages::transform::AverageComputed;
use crate::observability::messages::{processor::*, StructuredLog};
use crate::payload::{ProcessorRequest, ProcessorResponse};
use crate::traits::Processor;
use crate::transform::average;

/// Average processor - JSON array of numbers in, their mean out.
///
/// An empty array averages to `0`. A non-finite mean (overflowing sums)
/// is encoded as JSON `null`.
pub struct AverageProcessor;

impl AverageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AverageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Processor for AverageProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        let start_msg = ProcessorExecutionStarted {
            processor_id: self.name(),
            input_size: req.payload.len(),
        };

        let span = start_msg.span("processor_execution");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        let numbers: Vec<f64> = match decode_json(req.payload) {
            Ok(numbers) => numbers,
            Err(e) => return failure_response(self.name(), e),
        };

        let mean = average(&numbers);
        AverageComputed {
            count: numbers.len(),
            average: mean,
        }
        .log();

        let output_bytes = match serde_json::to_vec(&mean) {
            Ok(bytes) => bytes,
            Err(e) => return failure_response(self.name(), PayloadError::Serialize(e)),
        };

        ProcessorExecutionCompleted {
            processor_id: self.name(),
            input_size: start_msg.input_size,
            output_size: output_bytes.len(),
            duration: start_time.elapsed(),
        }
        .log();

        let metadata = HashMap::from([("count".to_string(), numbers.len().to_string())]);
        ProcessorResponse::payload(output_bytes, metadata)
    }

    fn name(&self) -> &'static str {
        "average"
    }
}
