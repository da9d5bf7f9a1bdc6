// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Keyed transformation: map every item of a sequence to `f(item)`.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Mapping from each distinct input item to its transformed value.
///
/// Built fresh on every call to [`KeyedTransformer::transform`]. When the
/// input repeats an item, the later occurrence overwrites the earlier one.
pub type ResultMapping<K, V> = HashMap<K, V>;

/// Applies a pure function to each item of a sequence and collects the
/// results keyed by the original item.
///
/// The `name` is a label for callers (logging, identification) and has no
/// effect on behavior. The transformer is immutable once built, so a shared
/// instance may be used from several threads at once when `F` is
/// `Send + Sync`.
///
/// # Example
/// ```
/// use keyed_transformer::transform::KeyedTransformer;
///
/// let shouter = KeyedTransformer::new("shouter", |s: &String| s.to_uppercase());
/// let result = shouter.transform(vec!["hello".to_string(), "world".to_string()]);
///
/// assert_eq!(result["hello"], "HELLO");
/// assert_eq!(result["world"], "WORLD");
/// ```
#[derive(Debug, Clone)]
pub struct KeyedTransformer<F> {
    name: String,
    function: F,
}

impl<F> KeyedTransformer<F> {
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transform every item, in sequence order, into `item -> f(item)`.
    ///
    /// An empty sequence yields an empty mapping. The function is assumed to
    /// be total over the item domain.
    pub fn transform<I, K, V>(&self, items: I) -> ResultMapping<K, V>
    where
        I: IntoIterator<Item = K>,
        K: Eq + Hash,
        F: Fn(&K) -> V,
    {
        let items = items.into_iter();
        let mut result = HashMap::with_capacity(items.size_hint().0);
        for item in items {
            let value = (self.function)(&item);
            result.insert(item, value);
        }
        result
    }

    /// Same check as the free function [`validate`].
    pub fn validate<K, V, S: BuildHasher>(&self, mapping: &HashMap<K, V, S>) -> bool {
        self::validate(mapping)
    }
}

/// Returns `true` iff the mapping has at least one entry.
pub fn validate<K, V, S: BuildHasher>(mapping: &HashMap<K, V, S>) -> bool {
    !mapping.is_empty()
}
