//! `Maskable` implementations for standard library types.
//!
//! Containers (`Option`, `Box`, `Vec`, maps, ...) walk their contents and
//! rebuild themselves from the masked parts. Everything else is copied.
//!
//! ## Strings inside containers are copied
//!
//! Directives attach to record fields, not to values. A `Vec<String>` or
//! `Option<String>` field has no directive to apply to its elements, so its
//! strings come out unchanged. Records inside containers are masked as usual.
//!
//! ## Map keys are not masked
//!
//! For `HashMap` and `BTreeMap` only **values** are walked. Keys are cloned
//! to preserve hashing and ordering invariants.
//!
//! ## Set masking can collapse elements
//!
//! For `HashSet` and `BTreeSet`, each element is masked and the results are
//! collected back into a set. Records whose masked copies compare equal
//! collapse into one element, so the masked set may be smaller.
//!
//! ## References
//!
//! Only `&str` is accepted behind a reference. A borrowed record cannot be
//! rebuilt with masked fields; own it or mark the field `#[mask(skip)]`.

mod maps;
mod passthrough;
mod sets;
mod wrappers;


macro_rules! impl_maskable_passthrough {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::record::Maskable for $ty {
                fn mask_with(&self, _masker: &crate::engine::Masker) -> Self {
                    Clone::clone(self)
                }
            }
        )+
    };
}

pub(super) use impl_maskable_passthrough;
