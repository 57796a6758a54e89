//! Adapters for emitting masked records through `slog`.
//!
//! [`MaskedJson`] implements `slog::Value` by handing the masked JSON to
//! `slog`'s nested-value support, so structured drains see the record's
//! fields. The value is computed from the masked copy; the original record
//! is never serialized.
//!
//! This module does not configure `slog` or install drains.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{engine::Masker, output::MaskedJsonExt, record::Record};

/// A masked record captured as JSON, ready to be logged with `slog`.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    /// Wraps JSON that was already produced from a masked copy.
    #[must_use]
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The wrapped JSON.
    #[must_use]
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Unwraps the JSON.
    #[must_use]
    pub fn into_inner(self) -> JsonValue {
        self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for logging masked records with `slog`.
///
/// ## Example
/// ```ignore
/// use fieldmask::slog::SlogMaskedExt;
///
/// info!(logger, "payment"; "card" => card.slog_masked(&masker));
/// ```
pub trait SlogMaskedExt: Record + Serialize {
    /// Masks `self` and wraps the JSON form of the copy.
    ///
    /// Serialization failures are stored as a JSON string, see
    /// [`MaskedJsonExt::masked_json`].
    #[must_use]
    fn slog_masked(&self, masker: &Masker) -> MaskedJson {
        MaskedJson::new(self.masked_json(masker))
    }
}

impl<T> SlogMaskedExt for T where T: Record + Serialize {}
