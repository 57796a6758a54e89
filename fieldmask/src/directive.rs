//! Parsing of directive strings such as `"last,3"` or `"corners,5-4"`.
//!
//! A directive is `method` or `method,options`. The method is everything
//! before the first `,`; the remainder is split on `,` into raw option tokens.
//! Parsing never fails: interpreting the tokens is left to the strategy, and
//! the bound helpers below return `None` for anything malformed so callers
//! can fall back to their defaults.

/// A parsed masking directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive<'a> {
    method: &'a str,
    options: Vec<&'a str>,
}

impl<'a> Directive<'a> {
    /// Splits `raw` into a method name and its option tokens.
    ///
    /// ```
    /// use fieldmask::Directive;
    ///
    /// let directive = Directive::parse("corners,5-4");
    /// assert_eq!(directive.method(), "corners");
    /// assert_eq!(directive.options(), ["5-4"]);
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(',') {
            Some((method, rest)) => Self {
                method,
                options: rest.split(',').collect(),
            },
            None => Self {
                method: raw,
                options: Vec::new(),
            },
        }
    }

    /// The strategy name.
    #[must_use]
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// Raw option tokens following the method, in order.
    #[must_use]
    pub fn options(&self) -> &[&'a str] {
        &self.options
    }
}

/// Parses the first option as a single count (`"last,3"` → `3`).
#[must_use]
pub fn parse_count(options: &[&str]) -> Option<usize> {
    options.first()?.parse().ok()
}

/// Parses the first option as two `-`-separated counts (`"5-4"` → `(5, 4)`).
///
/// Returns `None` unless there are exactly two numeric parts.
#[must_use]
pub fn parse_bounds(options: &[&str]) -> Option<(usize, usize)> {
    let mut parts = options.first()?.split('-');
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}
