// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Core transformation logic.
//!
//! Everything here is synchronous and side-effect free: each call allocates
//! its own result and no state is shared between calls.

mod keyed;
mod stats;
pub mod text;

pub use keyed::{validate, KeyedTransformer, ResultMapping};
pub use stats::average;
pub use text::{TextFn, TextTransform};

/// A transformer over owned strings using one of the built-in functions.
pub type TextTransformer = KeyedTransformer<TextFn>;

impl TextTransformer {
    pub fn from_text_transform(name: impl Into<String>, transform: TextTransform) -> Self {
        KeyedTransformer::new(name, transform.as_fn())
    }
}
