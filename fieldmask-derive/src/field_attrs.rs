//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms. The directive string itself is kept
//! verbatim: method lookup and option parsing happen at runtime so that
//! unknown methods fail open instead of failing the build.

use proc_macro2::Span;
use syn::{
    Attribute, Ident, LitStr, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
};

/// How a single field takes part in masking.
///
/// | Attribute                          | Variant       | Behavior                                |
/// |------------------------------------|---------------|-----------------------------------------|
/// | None                               | `Unannotated` | Walk nested values; strings copied      |
/// | `#[mask("method,opts")]`           | `Directive`   | Dispatch string fields to the registry  |
/// | `#[mask("method", mask_char = "#")]` | `Directive` | Same, with a custom mask character      |
/// | `#[mask(skip)]`                    | `Skip`        | Clone as-is, no traversal               |
#[derive(Clone, Debug)]
pub(crate) enum FieldMask {
    /// No annotation: walk nested values, copy everything else.
    Unannotated,
    /// `#[mask("...")]`: a directive for the strategy registry.
    Directive {
        directive: LitStr,
        mask_char: Option<LitStr>,
    },
    /// `#[mask(skip)]`: explicit passthrough for foreign types.
    Skip,
}

enum MaskArg {
    Directive(LitStr),
    MaskChar(LitStr),
    Skip(Span),
}

impl Parse for MaskArg {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Directive(input.parse()?));
        }
        let key: Ident = input.parse()?;
        if key == "skip" {
            return Ok(Self::Skip(key.span()));
        }
        if key == "mask_char" {
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;
            if value.value().is_empty() {
                return Err(syn::Error::new(
                    value.span(),
                    "`mask_char` must not be empty (omit it to use the masker default)",
                ));
            }
            return Ok(Self::MaskChar(value));
        }
        Err(syn::Error::new(
            key.span(),
            format!("unknown `#[mask]` option `{key}`; expected a directive string, `mask_char = \"..\"` or `skip`"),
        ))
    }
}

fn parse_mask_list(attr: &Attribute) -> Result<FieldMask> {
    let args = attr.parse_args_with(Punctuated::<MaskArg, Token![,]>::parse_terminated)?;

    let mut directive = None;
    let mut mask_char = None;
    let mut skip = None;
    for arg in args {
        match arg {
            MaskArg::Directive(lit) => {
                if directive.is_some() {
                    return Err(syn::Error::new(lit.span(), "duplicate directive string"));
                }
                directive = Some(lit);
            }
            MaskArg::MaskChar(lit) => {
                if mask_char.is_some() {
                    return Err(syn::Error::new(lit.span(), "duplicate `mask_char`"));
                }
                mask_char = Some(lit);
            }
            MaskArg::Skip(span) => skip = Some(span),
        }
    }

    match (directive, mask_char, skip) {
        (None, None, Some(_)) => Ok(FieldMask::Skip),
        (_, _, Some(span)) => Err(syn::Error::new(
            span,
            "`skip` cannot be combined with a directive or `mask_char`",
        )),
        (Some(directive), mask_char, None) => Ok(FieldMask::Directive {
            directive,
            mask_char,
        }),
        (None, Some(lit), None) => Err(syn::Error::new(
            lit.span(),
            "`mask_char` requires a directive, e.g. #[mask(\"all\", mask_char = \"#\")]",
        )),
        (None, None, None) => Err(syn::Error::new(
            attr.span(),
            "empty `#[mask()]`; use #[mask(\"method\")] or #[mask(skip)]",
        )),
    }
}

pub(crate) fn parse_field_mask(attrs: &[Attribute]) -> Result<FieldMask> {
    let mut found: Option<FieldMask> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }
        let parsed = match &attr.meta {
            Meta::List(_) => parse_mask_list(attr)?,
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "missing directive: use #[mask(\"method\")] (e.g., #[mask(\"all\")], #[mask(\"last,4\")])",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[mask(\"method\")] syntax, not #[mask = ...]",
                ));
            }
        };
        if found.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[mask] attributes on the same field",
            ));
        }
        found = Some(parsed);
    }

    Ok(found.unwrap_or(FieldMask::Unannotated))
}

/// Rejects `#[mask]` on the struct itself; directives belong to fields.
pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("mask")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "`#[mask]` is a field attribute; annotate the fields to mask",
        )),
        None => Ok(()),
    }
}
