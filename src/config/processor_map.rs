// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::{LocalProcessorFactory, TimedProcessor};
use crate::config::Config;
use crate::errors::ProcessorMapError;
use crate::observability::messages::{processor::ProcessorMapBuilt, StructuredLog};
use crate::traits::Processor;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping processor IDs to their implementations.
///
/// Filled once at startup, then used for dispatch by lookup: a caller holds
/// an ID (the route key) and asks the map for the handler. Processors are
/// stored as `Arc<dyn Processor>` so the same instance can serve concurrent
/// requests.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use keyed_transformer::backends::local::AverageProcessor;
/// use keyed_transformer::config::ProcessorMap;
/// use keyed_transformer::traits::Processor;
///
/// let mut processor_map = ProcessorMap::new();
/// let average: Arc<dyn Processor> = Arc::new(AverageProcessor::new());
/// processor_map.insert("mean".to_string(), average);
///
/// assert!(processor_map.contains_key("mean"));
/// assert_eq!(processor_map.get("mean").unwrap().name(), "average");
/// ```
#[derive(Clone, Default)]
pub struct ProcessorMap(pub HashMap<String, Arc<dyn Processor>>);

impl ProcessorMap {
    /// Create a new empty processor map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Create a ProcessorMap from configuration, resolving all processors
    ///
    /// Processors with `timed: true` are wrapped in a [`TimedProcessor`].
    pub fn from_config(cfg: &Config) -> Result<Self, ProcessorMapError> {
        let mut map = Self::new();
        let mut timed_count = 0;

        for p in &cfg.processors {
            let mut processor = LocalProcessorFactory::create_processor(p)?;
            if p.timed {
                processor = Arc::new(TimedProcessor::new(processor));
                timed_count += 1;
            }
            map.register(p.id.clone(), processor)?;
        }

        ProcessorMapBuilt {
            processor_count: map.len(),
            timed_count,
        }
        .log();

        Ok(map)
    }

    /// Insert a processor into the map, replacing any previous entry
    pub fn insert(&mut self, id: String, processor: Arc<dyn Processor>) {
        self.0.insert(id, processor);
    }

    /// Insert a processor, refusing to replace an existing one
    pub fn register(&mut self, id: String, processor: Arc<dyn Processor>) -> Result<(), ProcessorMapError> {
        if self.0.contains_key(&id) {
            return Err(ProcessorMapError::DuplicateProcessor { processor_id: id });
        }
        self.0.insert(id, processor);
        Ok(())
    }

    /// Get a processor by ID
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Processor>> {
        self.0.get(id)
    }

    /// Check if a processor exists
    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Get all processor IDs
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ProcessorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.0.keys().collect();
        ids.sort();
        f.debug_struct("ProcessorMap")
            .field("processor_count", &self.0.len())
            .field("processor_ids", &ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::AverageProcessor;
    use crate::config::{ProcessorConfig, ProcessorKind};
    use crate::transform::TextTransform;

    fn processor_config(id: &str, kind: ProcessorKind, timed: bool) -> ProcessorConfig {
        ProcessorConfig {
            id: id.to_string(),
            processor: kind,
            name: None,
            function: if kind.takes_function() {
                Some(TextTransform::Lower)
            } else {
                None
            },
            timed,
        }
    }

    #[test]
    fn test_from_config_table_driven() {
        struct TestCase {
            name: &'static str,
            processors: Vec<ProcessorConfig>,
            expected_ids: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty config",
                processors: vec![],
                expected_ids: vec![],
            },
            TestCase {
                name: "single transformer",
                processors: vec![processor_config("lower", ProcessorKind::KeyedTransform, false)],
                expected_ids: vec!["lower"],
            },
            TestCase {
                name: "mixed and timed",
                processors: vec![
                    processor_config("lower", ProcessorKind::KeyedTransform, true),
                    processor_config("mean", ProcessorKind::Average, false),
                ],
                expected_ids: vec!["lower", "mean"],
            },
        ];

        for test_case in test_cases {
            let config = Config {
                processors: test_case.processors,
                ..Config::default()
            };
            let map = ProcessorMap::from_config(&config).unwrap();

            let mut ids: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
            ids.sort();
            assert_eq!(ids, test_case.expected_ids, "Test case '{}' failed", test_case.name);
        }
    }

    #[test]
    fn test_timed_wrapper_keeps_inner_name() {
        let config = Config {
            processors: vec![processor_config("mean", ProcessorKind::Average, true)],
            ..Config::default()
        };

        let map = ProcessorMap::from_config(&config).unwrap();
        assert_eq!(map.get("mean").unwrap().name(), "average");
    }

    #[test]
    fn test_from_config_rejects_duplicate_ids() {
        let config = Config {
            processors: vec![
                processor_config("x", ProcessorKind::Average, false),
                processor_config("x", ProcessorKind::KeyedTransform, false),
            ],
            ..Config::default()
        };

        let result = ProcessorMap::from_config(&config);
        assert!(matches!(
            result,
            Err(ProcessorMapError::DuplicateProcessor { ref processor_id }) if processor_id == "x"
        ));
    }

    #[test]
    fn test_register_and_insert() {
        let mut map = ProcessorMap::new();
        assert!(map.is_empty());

        map.register("a".to_string(), Arc::new(AverageProcessor::new())).unwrap();
        assert!(map.register("a".to_string(), Arc::new(AverageProcessor::new())).is_err());

        // insert replaces silently
        map.insert("a".to_string(), Arc::new(AverageProcessor::new()));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_debug_lists_sorted_ids() {
        let mut map = ProcessorMap::new();
        map.insert("b".to_string(), Arc::new(AverageProcessor::new()));
        map.insert("a".to_string(), Arc::new(AverageProcessor::new()));

        let debug = format!("{:?}", map);
        assert_eq!(debug, r#"ProcessorMap { processor_count: 2, processor_ids: ["a", "b"] }"#);
    }
}
