// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

use crate::config::consts::PROCESS_TIME_KEY;
use crate::payload::{ProcessorRequest, ProcessorResponse};
use crate::traits::Processor;

/// Wraps another processor and records how long each call took.
///
/// The elapsed wall-clock time, in seconds, is written to the response
/// metadata under `process_time` for both successful and failed calls.
pub struct TimedProcessor {
    inner: Arc<dyn Processor>,
}

impl TimedProcessor {
    pub fn new(inner: Arc<dyn Processor>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &Arc<dyn Processor> {
        &self.inner
    }
}

#[async_trait]
impl Processor for TimedProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        let start_time = Instant::now();
        let mut response = self.inner.process(req).await;
        let process_time = start_time.elapsed();

        tracing::trace!(
            processor_id = self.inner.name(),
            process_time_us = process_time.as_micros() as u64,
            "Processor '{}' timed at {:?}",
            self.inner.name(),
            process_time
        );

        response
            .metadata
            .insert(PROCESS_TIME_KEY.to_string(), process_time.as_secs_f64().to_string());
        response
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::{AverageProcessor, KeyedTransformProcessor};

    fn process_time(response: &ProcessorResponse) -> f64 {
        response.metadata[PROCESS_TIME_KEY].parse().unwrap()
    }

    #[tokio::test]
    async fn test_annotates_successful_response() {
        let timed = TimedProcessor::new(Arc::new(KeyedTransformProcessor::upper("t")));
        let response = timed.process(ProcessorRequest::new(r#"["a"]"#.as_bytes())).await;

        assert_eq!(response.next_payload(), Some(br#"{"a":"A"}"#.as_slice()));
        assert!(process_time(&response) >= 0.0);
        assert_eq!(response.metadata["key_count"], "1");
    }

    #[tokio::test]
    async fn test_annotates_error_response() {
        let timed = TimedProcessor::new(Arc::new(AverageProcessor::new()));
        let response = timed.process(ProcessorRequest::new("nope".as_bytes())).await;

        assert!(response.is_error());
        assert!(process_time(&response) >= 0.0);
    }

    #[tokio::test]
    async fn test_name_delegates_to_inner() {
        let timed = TimedProcessor::new(Arc::new(AverageProcessor::new()));
        assert_eq!(timed.name(), "average");
        assert_eq!(timed.inner().name(), "average");
    }
}
