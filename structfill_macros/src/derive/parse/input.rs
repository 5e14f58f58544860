//! Input parsing for the `Populate` derive macro.
//!
//! This module gathers the type identifier, generics, fields and attribute
//! metadata in one pass so macro expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Member, Visibility};

use super::{FieldAttrs, TypeAttrs, parse_field_attrs, parse_type_attrs};

/// Everything generation needs to know about the deriving type.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub generics: Generics,
    pub attrs: TypeAttrs,
    pub kind: InputKind,
}

pub(crate) enum InputKind {
    Struct(Vec<FieldSpec>),
    Enum(Vec<VariantSpec>),
}

pub(crate) struct VariantSpec {
    pub ident: syn::Ident,
    pub style: VariantStyle,
    pub fields: Vec<FieldSpec>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum VariantStyle {
    Named,
    Unnamed,
    Unit,
}

/// One field with the decision of how it is populated.
pub(crate) struct FieldSpec {
    pub member: Member,
    pub label: String,
    pub ty: syn::Type,
    pub action: FieldAction,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum FieldAction {
    /// Recurse through the field's own `Populate` implementation.
    Visit,
    /// Apply the unrecognized-type policy.
    Opaque,
    /// Leave the field untouched.
    Skip,
}

impl FieldAction {
    /// Decides the action for a field. Private struct fields are not
    /// settable and are skipped whatever their attributes say.
    const fn decide(attrs: FieldAttrs, settable: bool) -> Self {
        if !settable || attrs.skip {
            Self::Skip
        } else if attrs.opaque {
            Self::Opaque
        } else {
            Self::Visit
        }
    }
}

/// Gathers information from the user-provided type.
///
/// Unions and types with lifetime parameters are rejected: overrides are
/// looked up by `TypeId`, which needs `'static` types.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let attrs = parse_type_attrs(&input.attrs)?;
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Populate cannot be derived for types with lifetime parameters",
        ));
    }
    let kind = match &input.data {
        Data::Struct(data) => InputKind::Struct(parse_fields(&data.fields, true)?),
        Data::Enum(data) => InputKind::Enum(
            data.variants
                .iter()
                .map(|variant| {
                    Ok(VariantSpec {
                        ident: variant.ident.clone(),
                        style: variant_style(&variant.fields),
                        fields: parse_fields(&variant.fields, false)?,
                    })
                })
                .collect::<syn::Result<_>>()?,
        ),
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Populate can only be derived for structs and enums",
            ));
        }
    };
    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        kind,
    })
}

const fn variant_style(fields: &Fields) -> VariantStyle {
    match fields {
        Fields::Named(_) => VariantStyle::Named,
        Fields::Unnamed(_) => VariantStyle::Unnamed,
        Fields::Unit => VariantStyle::Unit,
    }
}

/// Parses the fields of a struct or variant. Variant fields inherit the
/// enum's visibility, so only struct fields are checked for it.
fn parse_fields(fields: &Fields, check_visibility: bool) -> syn::Result<Vec<FieldSpec>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let attrs = parse_field_attrs(field)?;
            let settable = !check_visibility || !matches!(field.vis, Visibility::Inherited);
            let member = field
                .ident
                .clone()
                .map_or_else(|| Member::from(index), Member::Named);
            let label = field
                .ident
                .as_ref()
                .map_or_else(|| index.to_string(), |ident| ident.unraw().to_string());
            Ok(FieldSpec {
                member,
                label,
                ty: field.ty.clone(),
                action: FieldAction::decide(attrs, settable),
            })
        })
        .collect()
}
