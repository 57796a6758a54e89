//! Masked JSON output for logging boundaries.
//!
//! The JSON is always built from the masked copy; the original value is
//! never serialized. Serialization failures are not surfaced as errors:
//! the output becomes a JSON string describing the failure instead.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{engine::Masker, record::Record};

/// Serializes the masked copy of a record as a `serde_json::Value`.
///
/// ```
/// use fieldmask::{Mask, MaskedJsonExt, Masker};
///
/// #[derive(Mask, serde::Serialize)]
/// struct Login {
///     user: String,
///     #[mask("all")]
///     password: String,
/// }
///
/// let login = Login { user: "ana".into(), password: "hunter2".into() };
/// let json = login.masked_json(&Masker::new());
/// assert_eq!(json["user"], "ana");
/// assert_eq!(json["password"], "*******");
/// ```
pub trait MaskedJsonExt: Record + Serialize {
    /// Masks `self` with `masker` and converts the copy to JSON.
    ///
    /// If the conversion fails, the returned value is a JSON string starting
    /// with `"Failed to serialize masked value"`.
    #[must_use]
    fn masked_json(&self, masker: &Masker) -> JsonValue {
        let masked = self.mask_with(masker);
        serde_json::to_value(masked).unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize masked value: {err}"))
        })
    }
}

impl<T> MaskedJsonExt for T where T: Record + Serialize {}
