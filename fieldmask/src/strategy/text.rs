//! String transformations behind the built-in strategies.
//!
//! These are pure functions over a value and a mask string. Lengths and
//! offsets count Unicode scalar values, so multi-byte input is never split
//! inside a character. Each masked position receives one copy of `mask`.

use regex::Regex;

/// Byte offset of the `chars`-th scalar value, or `s.len()` past the end.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(offset, _)| offset)
}

/// Masks every character.
#[must_use]
pub fn mask_all(s: &str, mask: &str) -> String {
    mask.repeat(s.chars().count())
}

/// Masks every match of `pattern`, one mask per matched character.
///
/// An invalid pattern leaves the value unchanged.
#[must_use]
pub fn mask_regex(s: &str, pattern: &str, mask: &str) -> String {
    match Regex::new(pattern) {
        Ok(re) => mask_matches(s, &re, mask),
        Err(err) => {
            tracing::debug!(pattern, error = %err, "invalid mask pattern; value left unchanged");
            s.to_owned()
        }
    }
}

/// Masks every match of an already compiled pattern.
#[must_use]
pub fn mask_matches(s: &str, re: &Regex, mask: &str) -> String {
    re.replace_all(s, |caps: &regex::Captures<'_>| {
        mask.repeat(caps[0].chars().count())
    })
    .into_owned()
}

/// Masks the first `n` characters; fully masks values of `n` characters or fewer.
#[must_use]
pub fn mask_first(s: &str, n: usize, mask: &str) -> String {
    let len = s.chars().count();
    if len <= n {
        return mask.repeat(len);
    }
    let mut out = mask.repeat(n);
    out.push_str(&s[byte_offset(s, n)..]);
    out
}

/// Masks the last `n` characters; fully masks values of `n` characters or fewer.
#[must_use]
pub fn mask_last(s: &str, n: usize, mask: &str) -> String {
    let len = s.chars().count();
    if len <= n {
        return mask.repeat(len);
    }
    let mut out = s[..byte_offset(s, len - n)].to_owned();
    out.push_str(&mask.repeat(n));
    out
}

/// Masks the first `n` and last `m` characters, keeping the middle.
///
/// Values of `n + m` characters or fewer are fully masked.
#[must_use]
pub fn mask_corners(s: &str, n: usize, m: usize, mask: &str) -> String {
    let len = s.chars().count();
    if len <= n.saturating_add(m) {
        return mask.repeat(len);
    }
    let mut out = mask.repeat(n);
    out.push_str(&s[byte_offset(s, n)..byte_offset(s, len - m)]);
    out.push_str(&mask.repeat(m));
    out
}

/// Keeps the first `n` and last `m` characters, masking the middle.
///
/// Values of `n + m` characters or fewer are returned **unchanged**. This
/// differs from [`mask_corners`], which fully masks short values; the
/// asymmetry is long-standing behaviour that callers rely on.
#[must_use]
pub fn mask_between(s: &str, n: usize, m: usize, mask: &str) -> String {
    let len = s.chars().count();
    if len <= n.saturating_add(m) {
        return s.to_owned();
    }
    let mut out = s[..byte_offset(s, n)].to_owned();
    out.push_str(&mask.repeat(len - n - m));
    out.push_str(&s[byte_offset(s, len - m)..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_masks_every_character() {
        assert_eq!(mask_all("secret123", "*"), "*********");
        assert_eq!(mask_all("", "*"), "");
        assert_eq!(mask_all("333", "+"), "+++");
    }

    #[test]
    fn all_counts_characters_not_bytes() {
        assert_eq!(mask_all("día", "*"), "***");
    }

    #[test]
    fn regex_masks_matches_only() {
        assert_eq!(
            mask_regex("john.doe@example.com", "^[^@]+", "X"),
            "XXXXXXXX@example.com"
        );
        assert_eq!(
            mask_regex("Jeferson Narvae", r"\b[A-Za-z]+\b", "*"),
            "******** ******"
        );
        assert_eq!(mask_regex("NY", r"\w+", "*"), "**");
    }

    #[test]
    fn regex_invalid_pattern_is_unchanged() {
        assert_eq!(mask_regex("Jhon", "[A-Z", "*"), "Jhon");
    }

    #[test]
    fn first_masks_prefix() {
        assert_eq!(mask_first("0998695861", 1, "*"), "*998695861");
        assert_eq!(mask_first("Floresta", 5, "*"), "*****sta");
    }

    #[test]
    fn first_short_value_fully_masked() {
        assert_eq!(mask_first("abc", 3, "*"), "***");
        assert_eq!(mask_first("ab", 5, "*"), "**");
        assert_eq!(mask_first("", 1, "*"), "");
    }

    #[test]
    fn last_masks_suffix() {
        assert_eq!(mask_last("2999999", 3, "*"), "2999***");
        assert_eq!(mask_last("Ecuador", 1, "*"), "Ecuado*");
    }

    #[test]
    fn last_short_value_fully_masked() {
        assert_eq!(mask_last("ab", 2, "#"), "##");
    }

    #[test]
    fn corners_masks_both_ends() {
        assert_eq!(
            mask_corners("0455555554459999", 5, 4, "*"),
            "*****5555445****"
        );
        assert_eq!(mask_corners("Doe", 1, 1, "*"), "*o*");
    }

    #[test]
    fn corners_short_value_fully_masked() {
        assert_eq!(mask_corners("Ec", 10, 20, "*"), "**");
        assert_eq!(mask_corners("ab", 1, 1, "*"), "**");
        assert_eq!(mask_corners("abcd", usize::MAX, usize::MAX, "*"), "****");
    }

    #[test]
    fn between_keeps_both_ends() {
        assert_eq!(mask_between("Wolfenstein", 2, 3, "*"), "Wo******ein");
        assert_eq!(mask_between("Firulais", 1, 1, "*"), "F******s");
    }

    #[test]
    fn between_short_value_unchanged() {
        assert_eq!(mask_between("ab", 1, 1, "*"), "ab");
        assert_eq!(mask_between("abc", 2, 1, "*"), "abc");
        assert_eq!(mask_between("abc", usize::MAX, 1, "*"), "abc");
    }

    #[test]
    fn multi_byte_values_are_not_split() {
        assert_eq!(mask_first("ñandú", 2, "*"), "**ndú");
        assert_eq!(mask_last("ñandú", 2, "*"), "ñan**");
        assert_eq!(mask_corners("ñandú", 1, 1, "*"), "*and*");
        assert_eq!(mask_between("ñandú", 1, 1, "*"), "ñ***ú");
    }

    #[test]
    fn multi_character_mask_repeats_per_position() {
        assert_eq!(mask_last("abcd", 2, "<>"), "ab<><>");
    }
}
