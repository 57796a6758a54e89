//! Masking strategies: the [`Strategy`] trait and the six built-ins.
//!
//! A strategy is a named, stateless transformation
//! `(value, mask_char, options) -> masked value`. The registry dispatches to
//! strategies by the method name of a field's directive. Built-ins never fail:
//! malformed options fall back to the documented default bounds (`1`, or
//! `1-1` for two-bound methods).
//!
//! # Example
//!
//! ```
//! use fieldmask::{Strategy, strategy::MaskLast};
//!
//! assert_eq!(MaskLast.mask("2999999", "*", &["3"]), "2999***");
//! assert_eq!(MaskLast.mask("Ecuador", "*", &[]), "Ecuado*");
//! ```

pub mod text;

use std::collections::HashMap;

use parking_lot::RwLock;
use regex::Regex;

use crate::directive::{parse_bounds, parse_count};

/// Method name of [`MaskAll`].
pub const ALL: &str = "all";
/// Method name of [`MaskRegex`].
pub const REGEX: &str = "regex";
/// Method name of [`MaskFirst`].
pub const FIRST: &str = "first";
/// Method name of [`MaskLast`].
pub const LAST: &str = "last";
/// Method name of [`MaskCorners`].
pub const CORNERS: &str = "corners";
/// Method name of [`MaskBetween`].
pub const BETWEEN: &str = "between";

/// Default visibility count for `first`/`last`, and for each side of
/// `corners`/`between`.
pub const DEFAULT_COUNT: usize = 1;

/// A string masking algorithm.
///
/// `options` are the raw tokens that followed the method name in the
/// directive (`"corners,5-4"` → `["5-4"]`). Implementations must be pure:
/// the same inputs always produce the same output.
///
/// Closures with a matching signature are strategies too:
///
/// ```
/// use fieldmask::Strategy;
///
/// let upper = |value: &str, _mask: &str, _options: &[&str]| value.to_uppercase();
/// assert_eq!(upper.mask("abc", "*", &[]), "ABC");
/// ```
pub trait Strategy: Send + Sync {
    /// Returns the masked form of `value`.
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String;
}

impl<F> Strategy for F
where
    F: Fn(&str, &str, &[&str]) -> String + Send + Sync,
{
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String {
        self(value, mask_char, options)
    }
}

fn count_or_default(method: &str, options: &[&str]) -> usize {
    parse_count(options).unwrap_or_else(|| {
        if !options.is_empty() {
            tracing::debug!(method, ?options, "malformed mask count; using default");
        }
        DEFAULT_COUNT
    })
}

fn bounds_or_default(method: &str, options: &[&str]) -> (usize, usize) {
    parse_bounds(options).unwrap_or_else(|| {
        if !options.is_empty() {
            tracing::debug!(method, ?options, "malformed mask bounds; using defaults");
        }
        (DEFAULT_COUNT, DEFAULT_COUNT)
    })
}

/// `all`: replaces every character.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaskAll;

impl Strategy for MaskAll {
    fn mask(&self, value: &str, mask_char: &str, _options: &[&str]) -> String {
        text::mask_all(value, mask_char)
    }
}

/// Compiled patterns a [`MaskRegex`] keeps before starting over.
const REGEX_CACHE_CAPACITY: usize = 256;

/// `regex,<pattern>`: replaces each match of the pattern.
///
/// The pattern is the whole remainder of the directive, commas included.
/// A missing or invalid pattern leaves the value unchanged. Compiled
/// patterns (and invalid ones) are cached per pattern string.
#[derive(Debug, Default)]
pub struct MaskRegex {
    cache: RwLock<HashMap<String, Option<Regex>>>,
}

impl MaskRegex {
    /// A regex strategy with an empty pattern cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn compiled(&self, pattern: &str) -> Option<Regex> {
        if let Some(cached) = self.cache.read().get(pattern) {
            return cached.clone();
        }
        let compiled = match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::debug!(pattern, error = %err, "invalid mask pattern; value left unchanged");
                None
            }
        };
        let mut cache = self.cache.write();
        if cache.len() >= REGEX_CACHE_CAPACITY {
            cache.clear();
        }
        cache.insert(pattern.to_owned(), compiled.clone());
        compiled
    }
}

impl Strategy for MaskRegex {
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String {
        if options.is_empty() {
            return value.to_owned();
        }
        match self.compiled(&options.join(",")) {
            Some(re) => text::mask_matches(value, &re, mask_char),
            None => value.to_owned(),
        }
    }
}

/// `first[,n]`: masks the first `n` characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaskFirst;

impl Strategy for MaskFirst {
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String {
        text::mask_first(value, count_or_default(FIRST, options), mask_char)
    }
}

/// `last[,n]`: masks the last `n` characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaskLast;

impl Strategy for MaskLast {
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String {
        text::mask_last(value, count_or_default(LAST, options), mask_char)
    }
}

/// `corners[,n-m]`: masks the first `n` and last `m` characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaskCorners;

impl Strategy for MaskCorners {
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String {
        let (first, last) = bounds_or_default(CORNERS, options);
        text::mask_corners(value, first, last, mask_char)
    }
}

/// `between[,n-m]`: masks everything except the first `n` and last `m` characters.
///
/// Values too short to leave a masked middle are returned unchanged; see
/// [`text::mask_between`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MaskBetween;

impl Strategy for MaskBetween {
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String {
        let (first, last) = bounds_or_default(BETWEEN, options);
        text::mask_between(value, first, last, mask_char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_defaults_to_one() {
        assert_eq!(MaskFirst.mask("0998695861", "*", &[]), "*998695861");
    }

    #[test]
    fn first_malformed_count_uses_default() {
        assert_eq!(MaskFirst.mask("abcdef", "*", &["x"]), "*bcdef");
        assert_eq!(MaskFirst.mask("abcdef", "*", &["-2"]), "*bcdef");
    }

    #[test]
    fn last_reads_count() {
        assert_eq!(MaskLast.mask("2999999", "*", &["3"]), "2999***");
    }

    #[test]
    fn corners_reads_bounds() {
        assert_eq!(
            MaskCorners.mask("0455555554459999", "*", &["5-4"]),
            "*****5555445****"
        );
    }

    #[test]
    fn corners_malformed_bounds_use_defaults() {
        assert_eq!(MaskCorners.mask("abcdef", "*", &["5"]), "*bcde*");
        assert_eq!(MaskCorners.mask("abcdef", "*", &["a-b"]), "*bcde*");
        assert_eq!(MaskCorners.mask("abcdef", "*", &["1-2-3"]), "*bcde*");
    }

    #[test]
    fn between_reads_bounds() {
        assert_eq!(
            MaskBetween.mask("Wolfenstein", "*", &["2-3"]),
            "Wo******ein"
        );
        assert_eq!(MaskBetween.mask("Firulais", "*", &[]), "F******s");
    }

    #[test]
    fn regex_rejoins_options_split_on_commas() {
        assert_eq!(
            MaskRegex::new().mask("a1 b22 c333", "#", &[r"\d{2", "3}"]),
            "a1 b## c###"
        );
    }

    #[test]
    fn regex_without_pattern_is_unchanged() {
        assert_eq!(MaskRegex::new().mask("value", "*", &[]), "value");
    }

    #[test]
    fn regex_patterns_are_compiled_once() {
        let strategy = MaskRegex::new();
        assert_eq!(strategy.mask("NY", "*", &[r"\w+"]), "**");
        assert_eq!(strategy.mask("Quito", "*", &[r"\w+"]), "*****");
        assert_eq!(strategy.mask("Jhon", "*", &["[A-Z"]), "Jhon");
        assert_eq!(strategy.mask("Doe", "*", &["[A-Z"]), "Doe");
        let cache = strategy.cache.read();
        assert_eq!(cache.len(), 2);
        assert!(cache[r"\w+"].is_some());
        assert!(cache["[A-Z"].is_none());
    }

    #[test]
    fn regex_cache_is_bounded() {
        let strategy = MaskRegex::new();
        for i in 0..=REGEX_CACHE_CAPACITY {
            let pattern = i.to_string();
            strategy.mask("a1", "*", &[pattern.as_str()]);
        }
        assert!(strategy.cache.read().len() <= REGEX_CACHE_CAPACITY);
        assert_eq!(strategy.mask("a1", "*", &["[0-9]"]), "a*");
    }

    #[test]
    fn all_ignores_options() {
        assert_eq!(MaskAll.mask("abc", "*", &["9"]), "***");
    }

    #[test]
    fn closure_is_a_strategy() {
        let reverse = |value: &str, _: &str, _: &[&str]| value.chars().rev().collect::<String>();
        assert_eq!(reverse.mask("abc", "*", &[]), "cba");
    }
}
