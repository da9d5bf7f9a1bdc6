use std::sync::Arc;

use super::processors::*;
use crate::config::{ProcessorConfig, ProcessorKind};
use crate::errors::ProcessorMapError;
use crate::observability::messages::{processor::ProcessorInstantiationFailed, StructuredLog};
use crate::traits::Processor;

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from configuration
    ///
    /// The `processor` field in the config determines which processor to create:
    /// - "keyed_transform" -> KeyedTransformProcessor, labelled with `name` (or `id`),
    ///   using `function` (default `upper`)
    /// - "average" -> AverageProcessor; a `function` here is a configuration error
    ///
    /// Timing is applied by the caller, see `ProcessorMap::from_config`.
    pub fn create_processor(config: &ProcessorConfig) -> Result<Arc<dyn Processor>, ProcessorMapError> {
        match config.processor {
            ProcessorKind::KeyedTransform => {
                let function = config.function.unwrap_or_default();
                Ok(Arc::new(KeyedTransformProcessor::new(config.label(), function)))
            }
            ProcessorKind::Average => match config.function {
                None => Ok(Arc::new(AverageProcessor::new())),
                Some(function) => {
                    let reason = format!("'{}' processors do not take a function (got '{}')", config.processor, function);
                    ProcessorInstantiationFailed {
                        processor_id: &config.id,
                        processor_kind: config.processor.as_str(),
                        reason: &reason,
                    }
                    .log();
                    Err(ProcessorMapError::ProcessorCreationFailed {
                        processor_id: config.id.clone(),
                        kind: config.processor,
                        reason,
                    })
                }
            },
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            ProcessorKind::KeyedTransform.as_str(),
            ProcessorKind::Average.as_str(),
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(impl_name: &str) -> bool {
        Self::list_available_implementations().contains(&impl_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ProcessorRequest;
    use crate::transform::TextTransform;

    fn create_test_config(id: &str, kind: ProcessorKind, function: Option<TextTransform>) -> ProcessorConfig {
        ProcessorConfig {
            id: id.to_string(),
            processor: kind,
            name: None,
            function,
            timed: false,
        }
    }

    #[tokio::test]
    async fn test_create_keyed_transform_processors() {
        let test_cases = vec![
            (Some(TextTransform::Upper), "hello", "HELLO"),
            (Some(TextTransform::Lower), "HELLO", "hello"),
            (Some(TextTransform::Proper), "hello world", "Hello World"),
            (Some(TextTransform::Title), "the quick brown fox", "The Quick Brown Fox"),
            (Some(TextTransform::Reverse), "abc", "cba"),
            (None, "default", "DEFAULT"),
        ];

        for (function, input, expected) in test_cases {
            let config = create_test_config("test", ProcessorKind::KeyedTransform, function);
            let processor = LocalProcessorFactory::create_processor(&config)
                .unwrap_or_else(|e| panic!("Failed to create processor for {:?}: {}", function, e));

            let payload = serde_json::to_vec(&[input]).unwrap();
            let response = processor.process(ProcessorRequest::new(payload)).await;

            let mapping: std::collections::HashMap<String, String> =
                serde_json::from_slice(response.next_payload().unwrap()).unwrap();
            assert_eq!(mapping[input], expected, "function {:?}", function);
        }
    }

    #[tokio::test]
    async fn test_label_comes_from_name_then_id() {
        let mut config = create_test_config("by_id", ProcessorKind::KeyedTransform, None);
        let processor = LocalProcessorFactory::create_processor(&config).unwrap();
        let response = processor.process(ProcessorRequest::new("[]".as_bytes())).await;
        assert_eq!(response.metadata["transformer"], "by_id");

        config.name = Some("by_name".to_string());
        let processor = LocalProcessorFactory::create_processor(&config).unwrap();
        let response = processor.process(ProcessorRequest::new("[]".as_bytes())).await;
        assert_eq!(response.metadata["transformer"], "by_name");
    }

    #[test]
    fn test_create_average_processor() {
        let config = create_test_config("mean", ProcessorKind::Average, None);
        let processor = LocalProcessorFactory::create_processor(&config).unwrap();
        assert_eq!(processor.name(), "average");
    }

    #[test]
    fn test_average_with_function_fails() {
        let config = create_test_config("mean", ProcessorKind::Average, Some(TextTransform::Upper));
        let result = LocalProcessorFactory::create_processor(&config);

        match result {
            Err(ProcessorMapError::ProcessorCreationFailed { processor_id, kind, .. }) => {
                assert_eq!(processor_id, "mean");
                assert_eq!(kind, ProcessorKind::Average);
            }
            _ => panic!("Expected ProcessorCreationFailed"),
        }
    }

    #[test]
    fn test_list_available_implementations() {
        let implementations = LocalProcessorFactory::list_available_implementations();
        assert_eq!(implementations, vec!["keyed_transform", "average"]);

        assert!(LocalProcessorFactory::is_implementation_available("average"));
        assert!(!LocalProcessorFactory::is_implementation_available("reverse_text"));
    }
}
