//! Records, field descriptors and the traversal traits.
//!
//! This module defines:
//!
//! - [`FieldDescriptor`] / [`FieldKind`]: the per-field metadata emitted by
//!   `#[derive(Mask)]`
//! - [`Maskable`]: types that can produce a masked copy of themselves
//! - [`Record`]: structs with a fixed, ordered descriptor list
//! - [`MaskExt`]: user-facing `.masked()` for records

use crate::engine::Masker;

/// The declared kind of a record field, as classified by the derive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A field spelled as `String`: masked when it carries a directive.
    Text,
    /// Any other non-scalar type, walked through [`Maskable`]. Nested
    /// records recurse; strings inside containers are copied as-is. A
    /// directive still applies when the type resolves to `String` (an alias
    /// or a type parameter).
    Nested,
    /// Scalars, `PhantomData` and `#[mask(skip)]` fields: always copied.
    Opaque,
}

/// Static description of one record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: FieldKind,
    directive: Option<&'static str>,
    mask_char: Option<&'static str>,
}

impl FieldDescriptor {
    /// A field without directive or mask character override.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            directive: None,
            mask_char: None,
        }
    }

    /// Attaches a raw directive string (`"last,3"`).
    #[must_use]
    pub const fn with_directive(mut self, directive: &'static str) -> Self {
        self.directive = Some(directive);
        self
    }

    /// Overrides the mask character for this field.
    #[must_use]
    pub const fn with_mask_char(mut self, mask_char: &'static str) -> Self {
        self.mask_char = Some(mask_char);
        self
    }

    /// Field name; tuple fields use their index (`"0"`, `"1"`, ...).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// How the derive classified the field's declared type.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The raw directive string, if the field is annotated.
    #[must_use]
    pub const fn directive(&self) -> Option<&'static str> {
        self.directive
    }

    /// The per-field mask character override, if any.
    #[must_use]
    pub const fn mask_char(&self) -> Option<&'static str> {
        self.mask_char
    }
}

/// A type that participates in masking traversal.
///
/// Implemented by `#[derive(Mask)]` for records, and by standard library
/// types: containers (`Option`, `Box`, `Vec`, maps, ...) walk their contents,
/// scalars and strings are copied. `mask_with` never mutates `self`; it
/// returns an independent copy.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Maskable`",
    label = "this type cannot be walked for masking",
    note = "use `#[derive(Mask)]` on the type definition",
    note = "or use `#[mask(skip)]` on the field to copy it as-is"
)]
pub trait Maskable: Sized {
    /// Whether values of this type are records (or pointer-like wrappers of
    /// one) and so accepted as the root of [`Masker::mask`].
    #[doc(hidden)]
    const IS_RECORD: bool = false;

    /// Returns a masked copy of `self`.
    #[must_use]
    fn mask_with(&self, masker: &Masker) -> Self;

    /// Returns a masked copy of `self` for a record field that carries a
    /// directive.
    ///
    /// Derived impls call this for every annotated field, whatever its
    /// spelling, so aliases of `String` and type parameters instantiated as
    /// `String` resolve to the `String` impl, which applies the directive.
    /// Every other type ignores the directive and walks itself.
    #[must_use]
    fn mask_directed(&self, masker: &Masker, _field: &FieldDescriptor) -> Self {
        self.mask_with(masker)
    }
}

/// A struct with a fixed, ordered set of described fields.
///
/// Implemented by `#[derive(Mask)]`.
pub trait Record: Maskable {
    /// The struct's name.
    const NAME: &'static str;

    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Looks up a field descriptor by name.
    #[must_use]
    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|field| field.name() == name)
    }
}

/// User-facing masking entrypoint for records.
///
/// Blanket-implemented for every [`Record`]; infallible because the root is
/// known to be a record.
pub trait MaskExt: Record {
    /// Returns a masked copy of `self`.
    #[must_use]
    fn masked(&self, masker: &Masker) -> Self {
        self.mask_with(masker)
    }
}

impl<T> MaskExt for T where T: Record {}
