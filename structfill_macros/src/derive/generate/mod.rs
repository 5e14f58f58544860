//! Code generation for the `Populate` and `MapKey` derive macros.
//!
//! Emits the `Populate` impl (and, for structs, the `Record` marker). The
//! override check is shared; the body that follows comes from
//! [`record`] for structs and [`variants`] for enums. `MapKey` impls are a
//! single method returning the type's `Default` value.

mod bounds;
mod record;
mod variants;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use super::parse::{InputKind, ParsedInput, TypeAttrs};

/// Path through which generated code names the runtime crate: `structfill`
/// unless the type sets `#[populate(crate = "...")]`.
fn runtime_path(attrs: &TypeAttrs) -> TokenStream {
    attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { structfill }, |path| quote! { #path })
}

/// Generate the complete trait implementation output for `parsed`.
pub(crate) fn generate_impl(parsed: &ParsedInput) -> TokenStream {
    let krate = runtime_path(&parsed.attrs);
    let ident = &parsed.ident;
    let generics = bounds::with_populate_bounds(parsed, &krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (shape, body, marker) = match &parsed.kind {
        InputKind::Struct(fields) => (
            quote! { #krate::Shape::Record },
            record::struct_body(fields),
            quote! {
                impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {}
            },
        ),
        InputKind::Enum(variants) => (
            quote! { #krate::Shape::Enum },
            variants::enum_body(variants),
            quote! {},
        ),
    };

    quote! {
        impl #impl_generics #krate::Populate for #ident #ty_generics #where_clause {
            fn shape(&self) -> #krate::Shape {
                #shape
            }

            fn populate(
                &mut self,
                __filler: &mut #krate::Filler<'_>,
            ) -> #krate::FillResult<()> {
                if let ::core::option::Option::Some(__replacement) =
                    __filler.take_override::<Self>()
                {
                    *self = __replacement;
                    return ::core::result::Result::Ok(());
                }
                #body
                ::core::result::Result::Ok(())
            }
        }

        #marker
    }
}

/// Generate a `MapKey` implementation that keys maps with the type's `Default` value.
pub(crate) fn generate_map_key(input: &DeriveInput, attrs: &TypeAttrs) -> TokenStream {
    let krate = runtime_path(attrs);
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics #krate::MapKey for #ident #ty_generics #where_clause {
            fn representative_key(
                _filler: &#krate::Filler<'_>,
            ) -> #krate::FillResult<Self> {
                ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
            }
        }
    }
}
