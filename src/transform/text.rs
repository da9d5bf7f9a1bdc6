// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in string transformations selectable by name from configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Words kept lowercase by [`TextTransform::Title`] unless they open the text.
const TITLE_SMALL_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Plain function pointer used by configured transformers.
pub type TextFn = fn(&String) -> String;

/// Named string transformation.
///
/// Every variant is pure and total over `&str`. `Upper` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    #[default]
    Upper,
    Lower,
    Proper,
    Title,
    Reverse,
    Trim,
}

impl TextTransform {
    pub const ALL: [TextTransform; 6] = [
        TextTransform::Upper,
        TextTransform::Lower,
        TextTransform::Proper,
        TextTransform::Title,
        TextTransform::Reverse,
        TextTransform::Trim,
    ];

    pub fn apply(&self, input: &str) -> String {
        match self {
            TextTransform::Upper => input.to_uppercase(),
            TextTransform::Lower => input.to_lowercase(),
            TextTransform::Proper => input
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            TextTransform::Title => input
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let lower_word = word.to_lowercase();
                    if i == 0 || !TITLE_SMALL_WORDS.contains(&lower_word.as_str()) {
                        capitalize(word)
                    } else {
                        lower_word
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
            TextTransform::Reverse => input.chars().rev().collect(),
            TextTransform::Trim => input.trim().to_string(),
        }
    }

    /// The transformation as a function pointer, ready for a `KeyedTransformer`.
    pub fn as_fn(&self) -> TextFn {
        match self {
            TextTransform::Upper => |s: &String| TextTransform::Upper.apply(s),
            TextTransform::Lower => |s: &String| TextTransform::Lower.apply(s),
            TextTransform::Proper => |s: &String| TextTransform::Proper.apply(s),
            TextTransform::Title => |s: &String| TextTransform::Title.apply(s),
            TextTransform::Reverse => |s: &String| TextTransform::Reverse.apply(s),
            TextTransform::Trim => |s: &String| TextTransform::Trim.apply(s),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextTransform::Upper => "upper",
            TextTransform::Lower => "lower",
            TextTransform::Proper => "proper",
            TextTransform::Title => "title",
            TextTransform::Reverse => "reverse",
            TextTransform::Trim => "trim",
        }
    }
}

impl fmt::Display for TextTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextTransform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextTransform::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown text transform: '{}'", s))
    }
}

// First letter upper, rest lower.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_table_driven() {
        let test_cases = vec![
            (TextTransform::Upper, "hello", "HELLO"),
            (TextTransform::Upper, "straße", "STRASSE"),
            (TextTransform::Lower, "HeLLo", "hello"),
            (TextTransform::Proper, "hello wORLD", "Hello World"),
            (TextTransform::Proper, "  spaced   out ", "Spaced Out"),
            (TextTransform::Title, "the lord of the rings", "The Lord of the Rings"),
            (TextTransform::Title, "a tale OF two cities", "A Tale of Two Cities"),
            (TextTransform::Reverse, "hello", "olleh"),
            (TextTransform::Reverse, "añb", "bña"),
            (TextTransform::Trim, "  padded\t", "padded"),
        ];

        for (transform, input, expected) in test_cases {
            assert_eq!(transform.apply(input), expected, "{} on {:?}", transform, input);
        }
    }

    #[test]
    fn test_empty_input_is_total() {
        for transform in TextTransform::ALL {
            assert_eq!(transform.apply(""), "", "{}", transform);
        }
    }

    #[test]
    fn test_as_fn_matches_apply() {
        let input = "  the Quick brown fox ".to_string();
        for transform in TextTransform::ALL {
            assert_eq!((transform.as_fn())(&input), transform.apply(&input));
        }
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for transform in TextTransform::ALL {
            assert_eq!(transform.as_str().parse::<TextTransform>(), Ok(transform));
        }
        assert!("shout".parse::<TextTransform>().is_err());
    }

    #[test]
    fn test_default_is_upper() {
        assert_eq!(TextTransform::default(), TextTransform::Upper);
    }

    #[test]
    fn test_deserialize_snake_case() {
        let parsed: TextTransform = serde_yaml::from_str("title").unwrap();
        assert_eq!(parsed, TextTransform::Title);
    }
}
