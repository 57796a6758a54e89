//! Directive-driven masking of sensitive string fields.
//!
//! Annotate `String` fields with a directive naming a strategy and its
//! options, then ask a [`Masker`] for a masked copy:
//!
//! ```
//! use fieldmask::{Mask, Masker};
//!
//! #[derive(Clone, Mask)]
//! struct Card {
//!     #[mask("corners,5-4")]
//!     number: String,
//!     #[mask("all", mask_char = "+")]
//!     cvv: String,
//!     holder: String,
//! }
//!
//! let masker = Masker::new();
//! let card = Card {
//!     number: "0455555554459999".into(),
//!     cvv: "333".into(),
//!     holder: "Ana".into(),
//! };
//! let masked = masker.mask(&card)?;
//! assert_eq!(masked.number, "*****5555445****");
//! assert_eq!(masked.cvv, "+++");
//! assert_eq!(masked.holder, "Ana");
//! # Ok::<(), fieldmask::MaskError>(())
//! ```
//!
//! Directives have the form `method[,options]`. The built-in methods are
//! `all`, `regex,<pattern>`, `first[,n]`, `last[,n]`, `corners[,n-m]` and
//! `between[,n-m]`; more can be registered at runtime under any name.
//! Masking never fails because of a directive: unknown methods and invalid
//! patterns copy the value unchanged.
//!
//! Nested records, `Option`, `Box`, `Vec`, maps and other std containers
//! are walked. Other fields are copied. The input is never mutated.
//!
//! Optional integrations live behind features: `json` (masked
//! `serde_json::Value` output), `slog`, `tracing-json`, and passthrough
//! impls for `chrono`, `time` and `uuid` types.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use fieldmask_derive::Mask;

#[allow(unused_extern_crates)]
extern crate self as fieldmask;

mod containers;
mod directive;
mod engine;
mod error;
#[cfg(feature = "json")]
mod output;
mod record;
mod registry;
#[cfg(feature = "slog")]
pub mod slog;
pub mod strategy;
#[cfg(feature = "tracing-json")]
pub mod tracing;

pub use directive::{Directive, parse_bounds, parse_count};
pub use engine::{DEFAULT_MASK_CHAR, Masker, MaskerBuilder};
pub use error::MaskError;
#[cfg(feature = "json")]
pub use output::MaskedJsonExt;
pub use record::{FieldDescriptor, FieldKind, MaskExt, Maskable, Record};
pub use registry::StrategyRegistry;
#[cfg(feature = "slog")]
pub use self::slog::{MaskedJson, SlogMaskedExt};
pub use strategy::Strategy;
#[cfg(feature = "tracing-json")]
pub use self::tracing::TracingMaskedExt;
