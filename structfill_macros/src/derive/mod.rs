//! Expansion pipelines for `#[derive(Populate)]` and `#[derive(MapKey)]`.
//!
//! Parsing collects the type's shape and attributes into a `ParsedInput`,
//! then generation turns it into the trait implementation.

mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expands a derive input into the `Populate` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::generate_impl(&parsed))
}

/// Expands a derive input into a `MapKey` implementation returning the
/// type's `Default` value.
pub(crate) fn expand_map_key(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = parse::parse_type_attrs(&input.attrs)?;
    Ok(generate::generate_map_key(input, &attrs))
}
