//! Derive macro for `fieldmask`.
//!
//! This crate generates the code behind `#[derive(Mask)]`. It:
//! - reads `#[mask(...)]` field attributes
//! - emits the `Record` field descriptor list and the `Maskable` traversal body
//!
//! It does **not** parse directive strings or know about strategies. Those
//! live in the main `fieldmask` crate and are resolved at runtime, so an
//! unknown method fails open instead of failing the build.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod derive_struct;
mod field_attrs;
mod generics;
mod transform;
mod types;
use derive_struct::derive_struct;
use field_attrs::reject_container_attrs;
use generics::{add_clone_bounds, add_maskable_bounds};

/// Derives `fieldmask::Record` and `fieldmask::Maskable` for structs.
///
/// # Field Attributes
///
/// - **No annotation**: `String` and scalar fields are copied; every other field is walked
///   through `Maskable`, so nested records (by value, in `Option`, `Box`, `Vec`, ...) are
///   masked recursively.
///
/// - `#[mask("method[,options]")]`: on a `String` field, the directive is resolved against the
///   masker's strategy registry at runtime (e.g. `#[mask("last,4")]`, `#[mask("corners,5-4")]`).
///   The field is dispatched through `Maskable::mask_directed`, so aliases of `String` and
///   type parameters instantiated as `String` are masked too. On any other type the directive
///   is recorded in the descriptor but has no effect.
///
/// - `#[mask("method", mask_char = "#")]`: same, with a per-field mask character.
///
/// - `#[mask(skip)]`: the field is cloned as-is. Use this for foreign types that do not
///   implement `Maskable`.
///
/// Named, tuple and unit structs are supported. Enums and unions are rejected at compile time:
/// only records (fixed sets of fields) can be masked.
///
/// # Generated Impls
///
/// - `Record`: `NAME` and `FIELDS`, the descriptor list in declaration order.
/// - `Maskable`: builds the masked copy from `&self` without touching the original.
///
/// Type parameters used by walked fields get a `Maskable` bound; those used by `skip` fields
/// get a `Clone` bound.
#[proc_macro_derive(Mask, attributes(mask))]
pub fn derive_mask(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the fieldmask crate root.
///
/// Handles crate renaming (e.g., `masking = { package = "fieldmask", ... }`).
/// Inside fieldmask itself (unit tests and doctests alike) the absolute path
/// resolves through its `extern crate self as fieldmask`.
fn crate_root() -> TokenStream {
    match crate_name("fieldmask") {
        Ok(FoundCrate::Itself) => quote! { ::fieldmask },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::fieldmask },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = syn::parse_str::<syn::Path>(item).expect("fieldmask crate path should parse");
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    mask_body: TokenStream,
    descriptors: Vec<TokenStream>,
    maskable_generics: Vec<Ident>,
    clone_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    let derive_output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`Mask` can only be derived for structs; enums are not records",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`Mask` cannot be derived for unions",
            ));
        }
    };

    let crate_root = crate_root();
    let bounded = add_maskable_bounds(generics, &derive_output.maskable_generics);
    let bounded = add_clone_bounds(bounded, &derive_output.clone_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let name = ident.to_string();
    let descriptors = &derive_output.descriptors;
    let mask_body = &derive_output.mask_body;

    Ok(quote! {
        impl #impl_generics #crate_root::Record for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const FIELDS: &'static [#crate_root::FieldDescriptor] = &[#(#descriptors),*];
        }

        impl #impl_generics #crate_root::Maskable for #ident #ty_generics #where_clause {
            const IS_RECORD: bool = true;

            #[allow(unused_variables)]
            fn mask_with(&self, masker: &#crate_root::Masker) -> Self {
                #mask_body
            }
        }
    })
}
