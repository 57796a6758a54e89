//! Per-field code generation shared by named and tuple structs.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};

use crate::{
    crate_path,
    field_attrs::FieldMask,
    generics::collect_generics_from_type,
    types::{is_phantom_data, is_scalar_type, is_string_type},
};

/// Accumulated state while walking the fields of one struct.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) maskable_generics: &'a mut Vec<Ident>,
    pub(crate) clone_generics: &'a mut Vec<Ident>,
    /// Set once any field reads its descriptor at runtime.
    pub(crate) uses_descriptors: bool,
}

/// Generated pieces for a single field.
pub(crate) struct FieldOutput {
    /// Expression producing the field's value in the masked copy.
    pub(crate) value: TokenStream,
    /// `FieldDescriptor` constructor for `Record::FIELDS`.
    pub(crate) descriptor: TokenStream,
}

/// Generates the masked-copy expression and the descriptor for one field.
///
/// | Field type        | Annotation | Generated value                                   |
/// |-------------------|------------|---------------------------------------------------|
/// | anything          | `skip`     | clone                                             |
/// | scalar primitive  | any        | clone (directives ignored)                        |
/// | `PhantomData<T>`  | any        | clone                                             |
/// | anything else     | directive  | `Maskable::mask_directed(value, masker, field)`   |
/// | `String`          | none       | clone                                             |
/// | anything else     | none       | `Maskable::mask_with(value, masker)`              |
///
/// Directive-bearing fields are dispatched through the trait rather than by
/// spelling, so `String` aliases and type parameters reach the `String` impl.
pub(crate) fn generate_field(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    name: &str,
    index: usize,
    span: Span,
    mask: &FieldMask,
) -> FieldOutput {
    let descriptor_path = crate_path("FieldDescriptor");
    let kind_path = crate_path("FieldKind");
    let maskable_path = crate_path("Maskable");

    let (directive, mask_char) = match mask {
        FieldMask::Directive {
            directive,
            mask_char,
        } => (Some(directive), mask_char.as_ref()),
        FieldMask::Unannotated | FieldMask::Skip => (None, None),
    };

    let skip = matches!(mask, FieldMask::Skip);
    let opaque = skip || is_scalar_type(ty) || is_phantom_data(ty);
    let kind = if opaque {
        quote! { #kind_path::Opaque }
    } else if is_string_type(ty) {
        quote! { #kind_path::Text }
    } else {
        quote! { #kind_path::Nested }
    };

    let value = if opaque || (directive.is_none() && is_string_type(ty)) {
        if skip {
            collect_generics_from_type(ty, ctx.generics, ctx.clone_generics);
        }
        quote_spanned! { span => ::core::clone::Clone::clone(#binding) }
    } else if directive.is_some() {
        ctx.uses_descriptors = true;
        collect_generics_from_type(ty, ctx.generics, ctx.maskable_generics);
        quote_spanned! { span => #maskable_path::mask_directed(#binding, masker, &fields[#index]) }
    } else {
        collect_generics_from_type(ty, ctx.generics, ctx.maskable_generics);
        quote_spanned! { span => #maskable_path::mask_with(#binding, masker) }
    };

    let mut descriptor = quote! { #descriptor_path::new(#name, #kind) };
    if let Some(directive) = directive {
        descriptor = quote! { #descriptor.with_directive(#directive) };
    }
    if let Some(mask_char) = mask_char {
        descriptor = quote! { #descriptor.with_mask_char(#mask_char) };
    }
    FieldOutput { value, descriptor }
}
