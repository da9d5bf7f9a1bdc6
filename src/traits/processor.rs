use async_trait::async_trait;

use crate::payload::{ProcessorRequest, ProcessorResponse};

/// A named request handler.
///
/// `process` never fails at the type level: problems are reported through
/// `Outcome::Error` in the returned response.
#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse;

    fn name(&self) -> &'static str;
}
