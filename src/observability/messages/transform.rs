// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for results produced by the transformation core.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A keyed mapping was produced from a batch of items.
///
/// `item_count` and `key_count` differ when the input repeats items.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct MappingProduced<'a> {
    pub transformer: &'a str,
    pub function: &'a str,
    pub item_count: usize,
    pub key_count: usize,
}

impl Display for MappingProduced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transformer '{}' ({}) mapped {} items to {} keys",
            self.transformer, self.function, self.item_count, self.key_count
        )
    }
}

impl StructuredLog for MappingProduced<'_> {
    fn log(&self) {
        tracing::debug!(
            transformer = self.transformer,
            function = self.function,
            item_count = self.item_count,
            key_count = self.key_count,
            duplicates = self.item_count.saturating_sub(self.key_count),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "transform",
            span_name = name,
            transformer = self.transformer,
            function = self.function,
        )
    }
}

/// An empty mapping came out of a transformation.
///
/// # Log Level
/// `warn!` - Result fails validation
pub struct EmptyMapping<'a> {
    pub transformer: &'a str,
}

impl Display for EmptyMapping<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transformer '{}' produced an empty mapping",
            self.transformer
        )
    }
}

impl StructuredLog for EmptyMapping<'_> {
    fn log(&self) {
        tracing::warn!(transformer = self.transformer, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("empty_mapping", span_name = name, transformer = self.transformer)
    }
}

/// An average was computed.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct AverageComputed {
    pub count: usize,
    pub average: f64,
}

impl Display for AverageComputed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Average of {} numbers: {}", self.count, self.average)
    }
}

impl StructuredLog for AverageComputed {
    fn log(&self) {
        tracing::debug!(
            count = self.count,
            average = self.average,
            finite = self.average.is_finite(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("average", span_name = name, count = self.count)
    }
}
