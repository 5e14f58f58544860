//! Struct bodies: one statement per populated field.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::parse::{FieldAction, FieldSpec};

/// Emits the statement that populates `field` through `access`, an
/// expression of type `&mut FieldType`. Skipped fields emit nothing.
pub(crate) fn field_statement(field: &FieldSpec, access: &TokenStream) -> Option<TokenStream> {
    let label = &field.label;
    match field.action {
        FieldAction::Visit => Some(quote! { __filler.field(#label, #access)?; }),
        FieldAction::Opaque => {
            let ty = &field.ty;
            Some(quote! { __filler.opaque_field::<#ty>(#label)?; })
        }
        FieldAction::Skip => None,
    }
}

/// Visits struct fields in declaration order.
pub(crate) fn struct_body(fields: &[FieldSpec]) -> TokenStream {
    let statements = fields.iter().filter_map(|field| {
        let member = &field.member;
        field_statement(field, &quote! { &mut self.#member })
    });
    quote! { #( #statements )* }
}
