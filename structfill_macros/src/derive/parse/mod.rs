//! Parsing utilities for the `Populate` derive macro.

use syn::parenthesized;
use syn::{Attribute, Token};

mod input;
mod literals;
#[cfg(test)]
mod tests;

pub(crate) use input::{
    FieldAction, FieldSpec, InputKind, ParsedInput, VariantSpec, VariantStyle, parse_input,
};
use literals::lit_bool;
use literals::lit_str;

/// Type-level attributes recognised by `#[derive(Populate)]`.
#[derive(Default, Clone)]
pub(crate) struct TypeAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[populate(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `structfill::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Populate)]`.
///
/// - `skip` leaves the field untouched.
/// - `opaque` routes the field through the unrecognized-type policy without
///   requiring its type to implement `Populate`.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub opaque: bool,
}

/// Iterate all `#[populate(...)]` attributes once and apply a callback.
fn parse_populate<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("populate")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Accepts both the bare `flag` form and `flag = true/false`.
fn parse_flag(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        lit_bool(meta, key)
    } else {
        Ok(true)
    }
}

/// Extracts `#[populate(...)]` metadata applied to a struct or enum.
///
/// Only the `crate` key is currently recognised. Unknown keys are ignored so
/// callers keep compiling when new attributes appear.
pub(crate) fn parse_type_attrs(attrs: &[Attribute]) -> syn::Result<TypeAttrs> {
    let mut out = TypeAttrs::default();
    parse_populate(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[populate(...)]` attributes.
///
/// Recognised keys are `skip` and `opaque`; combining them is rejected since
/// a skipped field is never inspected. Unknown keys are ignored, matching
/// [`parse_type_attrs`].
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_populate(&field.attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("skip") => out.skip = parse_flag(meta, "skip")?,
            Some("opaque") => out.opaque = parse_flag(meta, "opaque")?,
            _ => discard_unknown(meta)?,
        }
        Ok(())
    })?;
    if out.skip && out.opaque {
        return Err(syn::Error::new_spanned(
            field,
            "`skip` and `opaque` cannot be combined on one field",
        ));
    }
    Ok(out)
}
