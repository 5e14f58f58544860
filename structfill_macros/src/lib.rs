//! Procedural macros for `structfill`.
//!
//! `#[derive(Populate)]` implements `structfill::Populate` for structs and
//! enums. Structs visit every settable field in declaration order; enums
//! visit the fields of the variant they currently hold. Both first check for
//! a registered override of their exact type and, if one exists, replace
//! themselves with it instead.
//!
//! Field attributes:
//!
//! - `#[populate(skip)]` leaves the field untouched.
//! - `#[populate(opaque)]` treats the field's type as unrecognized, so it is
//!   skipped or rejected according to the fail-on-unrecognized setting. The
//!   type does not need to implement `Populate`.
//!
//! Private fields are skipped, mirroring the rule that only externally
//! settable fields are populated. Type attribute `#[populate(crate = "...")]`
//! points generated code at a renamed `structfill` dependency.
//!
//! Map fields need a key type implementing `structfill::MapKey`.
//! `#[derive(MapKey)]` provides one that returns the type's `Default` value.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `structfill::Populate`.
#[proc_macro_derive(Populate, attributes(populate))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `structfill::MapKey`, keying maps with `Default::default()`.
#[proc_macro_derive(MapKey, attributes(populate))]
pub fn derive_map_key(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand_map_key(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
