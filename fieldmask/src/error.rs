//! Error types surfaced by the masker.
//!
//! Only two conditions are errors: looking up a strategy name that is not
//! registered, and asking to mask a root value that is not a record. Every
//! other failure (bad options, invalid patterns, short values) is recovered
//! inside the strategy that hit it.

use thiserror::Error;

/// Errors returned by [`crate::StrategyRegistry`] and [`crate::Masker`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MaskError {
    /// No strategy is registered under this name.
    #[error("masking strategy `{0}` is not registered")]
    StrategyNotFound(String),

    /// The root value handed to [`crate::Masker::mask`] is not a record.
    #[error("`{type_name}` is not a record; derive `Mask` on a struct to mask it")]
    NotARecord {
        /// `std::any::type_name` of the rejected root.
        type_name: &'static str,
    },
}
