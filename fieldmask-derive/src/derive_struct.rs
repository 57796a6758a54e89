//! Struct-specific `Record` / `Maskable` derivation.
//!
//! This module generates the field descriptor list and the body that builds
//! the masked copy, and collects the generic parameters that need bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{DataStruct, Fields, Result, spanned::Spanned};

use crate::{
    DeriveOutput,
    field_attrs::parse_field_mask,
    transform::{DeriveContext, generate_field},
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics),
        Fields::Unnamed(fields) => derive_unnamed_struct(fields, generics),
        Fields::Unit => Ok(DeriveOutput {
            mask_body: quote! { Self },
            descriptors: Vec::new(),
            maskable_generics: Vec::new(),
            clone_generics: Vec::new(),
        }),
    }
}

fn derive_named_struct(fields: syn::FieldsNamed, generics: &syn::Generics) -> Result<DeriveOutput> {
    let mut idents: Vec<Ident> = Vec::new();
    let mut bindings: Vec<Ident> = Vec::new();
    let mut values = Vec::new();
    let mut descriptors = Vec::new();
    let mut maskable_generics = Vec::new();
    let mut clone_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        maskable_generics: &mut maskable_generics,
        clone_generics: &mut clone_generics,
        uses_descriptors: false,
    };

    for (index, field) in fields.named.into_iter().enumerate() {
        let span = field.span();
        let mask = parse_field_mask(&field.attrs)?;
        let ident = field.ident.expect("named field should have an identifier");
        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);
        // Positional bindings keep field names such as `masker` from
        // shadowing the generated locals.
        let binding = format_ident!("field_{index}");
        let output = generate_field(&mut ctx, &field.ty, &binding, name, index, span, &mask);
        idents.push(ident);
        bindings.push(binding);
        values.push(output.value);
        descriptors.push(output.descriptor);
    }

    let fields_binding = fields_binding(ctx.uses_descriptors);
    Ok(DeriveOutput {
        mask_body: quote! {
            #fields_binding
            let Self { #(#idents: #bindings),* } = self;
            Self { #(#idents: #values),* }
        },
        descriptors,
        maskable_generics,
        clone_generics,
    })
}

fn derive_unnamed_struct(
    fields: syn::FieldsUnnamed,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let mut bindings = Vec::new();
    let mut values = Vec::new();
    let mut descriptors = Vec::new();
    let mut maskable_generics = Vec::new();
    let mut clone_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        maskable_generics: &mut maskable_generics,
        clone_generics: &mut clone_generics,
        uses_descriptors: false,
    };

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let mask = parse_field_mask(&field.attrs)?;
        let binding = format_ident!("field_{index}");
        let name = index.to_string();
        let output = generate_field(&mut ctx, &field.ty, &binding, &name, index, span, &mask);
        bindings.push(binding);
        values.push(output.value);
        descriptors.push(output.descriptor);
    }

    let fields_binding = fields_binding(ctx.uses_descriptors);
    Ok(DeriveOutput {
        mask_body: quote! {
            #fields_binding
            let Self ( #(#bindings),* ) = self;
            Self ( #(#values),* )
        },
        descriptors,
        maskable_generics,
        clone_generics,
    })
}

fn fields_binding(uses_descriptors: bool) -> TokenStream {
    if uses_descriptors {
        let record_path = crate::crate_path("Record");
        quote! { let fields = <Self as #record_path>::FIELDS; }
    } else {
        TokenStream::new()
    }
}
