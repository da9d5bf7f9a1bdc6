//! Configuration validation.
//!
//! Checks run in order and every problem found is collected, so a broken
//! config file is reported in one pass instead of one error per attempt:
//!
//! 1. **ID presence**: no processor has an empty or blank `id`
//! 2. **ID uniqueness**: no two processors share an `id` (a later duplicate
//!    would silently replace the earlier one in the registry)
//! 3. **Option fit**: `function` is only set on processor kinds that use it
//!
//! # Example
//! ```rust
//! use keyed_transformer::config::{validate_config, Config, ProcessorConfig, ProcessorKind};
//! use keyed_transformer::errors::ValidationError;
//! use keyed_transformer::transform::TextTransform;
//!
//! let mut config = Config::builtin();
//! config.processors.push(ProcessorConfig {
//!     id: "average".to_string(),
//!     processor: ProcessorKind::Average,
//!     name: None,
//!     function: Some(TextTransform::Lower),
//!     timed: false,
//! });
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert!(matches!(errors[0], ValidationError::DuplicateProcessorId { .. }));
//! assert!(matches!(errors[1], ValidationError::UnusedFunction { .. }));
//! ```

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    DuplicateProcessorId, UnusedFunction, ValidationCompleted, ValidationFailed, ValidationStarted,
};
use crate::observability::messages::StructuredLog;

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let processor_count = config.processors.len();
    ValidationStarted { processor_count }.log();

    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, processor) in config.processors.iter().enumerate() {
        if processor.id.trim().is_empty() {
            errors.push(ValidationError::EmptyProcessorId { index });
        } else if !seen.insert(processor.id.as_str()) {
            DuplicateProcessorId {
                processor_id: &processor.id,
            }
            .log();
            errors.push(ValidationError::DuplicateProcessorId {
                processor_id: processor.id.clone(),
            });
        }

        if let Some(function) = processor.function {
            if !processor.processor.takes_function() {
                UnusedFunction {
                    processor_id: &processor.id,
                    processor_kind: processor.processor.as_str(),
                    function: function.as_str(),
                }
                .log();
                errors.push(ValidationError::UnusedFunction {
                    processor_id: processor.id.clone(),
                    processor_kind: processor.processor.to_string(),
                    function: function.to_string(),
                });
            }
        }
    }

    if errors.is_empty() {
        ValidationCompleted { processor_count }.log();
        Ok(())
    } else {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}
