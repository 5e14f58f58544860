//! Enum bodies: populate the fields of whichever variant is held.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::record::field_statement;
use crate::derive::parse::{FieldAction, VariantSpec, VariantStyle};

/// Emits a `match` over the variants. Enums without variants have nothing
/// to visit and produce an empty body.
pub(crate) fn enum_body(variants: &[VariantSpec]) -> TokenStream {
    if variants.is_empty() {
        return quote! {};
    }
    let arms = variants.iter().map(variant_arm);
    quote! {
        match self {
            #( #arms )*
        }
    }
}

fn variant_arm(variant: &VariantSpec) -> TokenStream {
    let ident = &variant.ident;
    let bindings: Vec<_> = (0..variant.fields.len())
        .map(|index| format_ident!("__f{}", index))
        .collect();
    let statements = variant
        .fields
        .iter()
        .zip(&bindings)
        .filter_map(|(field, binding)| field_statement(field, &quote! { #binding }));
    let visited = variant
        .fields
        .iter()
        .zip(&bindings)
        .filter(|(field, _)| field.action == FieldAction::Visit);

    let pattern = match variant.style {
        VariantStyle::Unit => quote! { Self::#ident },
        VariantStyle::Named => {
            let pairs = visited.map(|(field, binding)| {
                let member = &field.member;
                quote! { #member: #binding }
            });
            quote! { Self::#ident { #( #pairs, )* .. } }
        }
        VariantStyle::Unnamed => {
            let slots = variant.fields.iter().zip(&bindings).map(|(field, binding)| {
                if field.action == FieldAction::Visit {
                    quote! { #binding }
                } else {
                    quote! { _ }
                }
            });
            quote! { Self::#ident( #( #slots ),* ) }
        }
    };

    quote! {
        #pattern => {
            #( #statements )*
        }
    }
}
