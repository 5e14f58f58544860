//! Where-clause generation for generic types.

use proc_macro2::TokenStream;
use syn::{Generics, parse_quote};

use crate::derive::parse::{FieldAction, InputKind, ParsedInput};

/// Adds the bounds a generic `Populate` impl needs.
///
/// Every type parameter must be `'static` so the override lookup can take a
/// `TypeId`, and every visited field type must itself implement `Populate`.
/// Non-generic types are returned unchanged.
pub(crate) fn with_populate_bounds(parsed: &ParsedInput, krate: &TokenStream) -> Generics {
    let mut generics = parsed.generics.clone();
    if generics.type_params().next().is_none() {
        return generics;
    }
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let fields: Vec<_> = match &parsed.kind {
        InputKind::Struct(fields) => fields.iter().collect(),
        InputKind::Enum(variants) => variants.iter().flat_map(|v| v.fields.iter()).collect(),
    };
    let where_clause = generics.make_where_clause();
    for field in fields
        .into_iter()
        .filter(|field| field.action == FieldAction::Visit)
    {
        let ty = &field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: #krate::Populate));
    }
    generics
}
