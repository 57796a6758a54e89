//! Adapters for emitting masked records through `tracing`.
//!
//! `tracing` fields are flat, so the masked record is rendered as compact
//! JSON and recorded as a display value.
//!
//! # Example
//!
//! ```ignore
//! use fieldmask::tracing::TracingMaskedExt;
//!
//! tracing::info!(card = %card.tracing_masked(&masker), "payment accepted");
//! ```

use serde::Serialize;
use tracing::field::{DisplayValue, display};

use crate::{engine::Masker, output::MaskedJsonExt, record::Record};

/// Extension trait for logging masked records as `tracing` display values.
pub trait TracingMaskedExt: Record + Serialize {
    /// Masks `self` and renders the copy as a JSON display value.
    #[must_use]
    fn tracing_masked(&self, masker: &Masker) -> DisplayValue<String> {
        display(self.masked_json(masker).to_string())
    }
}

impl<T> TracingMaskedExt for T where T: Record + Serialize {}
