// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use super::{decode_json, failure_response};
use crate::errors::PayloadError;
use crate::observability::messages::transform::{EmptyMapping, MappingProduced};
use crate::observability::messages::{processor::*, StructuredLog};
use crate::payload::{ProcessorRequest, ProcessorResponse};
use crate::traits::Processor;
use crate::transform::{TextTransform, TextTransformer};

/// Keyed Transform processor - maps each string of a JSON array to its
/// transformed value.
///
/// Input payload: `["hello", "world"]`. Output payload, with keys sorted:
/// `{"hello":"HELLO","world":"WORLD"}`. Repeated strings collapse to one key.
///
/// Response metadata: `transformer`, `function`, `item_count`, `key_count`,
/// and `valid` (whether the mapping is non-empty).
pub struct KeyedTransformProcessor {
    transformer: TextTransformer,
    function: TextTransform,
}

impl KeyedTransformProcessor {
    pub fn new(label: impl Into<String>, function: TextTransform) -> Self {
        Self {
            transformer: TextTransformer::from_text_transform(label, function),
            function,
        }
    }

    pub fn upper(label: impl Into<String>) -> Self {
        Self::new(label, TextTransform::Upper)
    }
}

#[async_trait]
impl Processor for KeyedTransformProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        let start_msg = ProcessorExecutionStarted {
            processor_id: self.name(),
            input_size: req.payload.len(),
        };

        let span = start_msg.span("processor_execution");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        let items: Vec<String> = match decode_json(req.payload) {
            Ok(items) => items,
            Err(e) => return failure_response(self.name(), e),
        };
        let item_count = items.len();

        let mapping = self.transformer.transform(items);
        let valid = self.transformer.validate(&mapping);

        MappingProduced {
            transformer: self.transformer.name(),
            function: self.function.as_str(),
            item_count,
            key_count: mapping.len(),
        }
        .log();
        if !valid {
            EmptyMapping {
                transformer: self.transformer.name(),
            }
            .log();
        }

        let ordered: BTreeMap<&String, &String> = mapping.iter().collect();
        let output_bytes = match serde_json::to_vec(&ordered) {
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

        let metadata = HashMap::from([
            ("transformer".to_string(), self.transformer.name().to_string()),
            ("function".to_string(), self.function.to_string()),
            ("item_count".to_string(), item_count.to_string()),
            ("key_count".to_string(), mapping.len().to_string()),
            ("valid".to_string(), valid.to_string()),
        ]);

        ProcessorResponse::payload(output_bytes, metadata)
    }

    fn name(&self) -> &'static str {
        "keyed_transform"
    }
}
