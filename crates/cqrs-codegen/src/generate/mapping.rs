// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field lists and explicit field-to-field mappings.
//!
//! Generated code never copies values by reflection or by convention; every
//! transfer is a named field expression produced here.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Type};

use crate::descriptor::PropertyDescriptor;

/// A field of a generated shape.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Field name.
    pub ident: &'a Ident,

    /// Field type.
    pub ty: &'a Type
}

impl<'a> From<&'a PropertyDescriptor> for Field<'a> {
    fn from(property: &'a PropertyDescriptor) -> Self {
        Self {
            ident: &property.ident,
            ty:    &property.ty
        }
    }
}

/// `pub name: Type,` declarations with a doc line each.
pub fn declarations(fields: &[Field<'_>]) -> TokenStream {
    let tokens = fields.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let doc = format!("Value for `{}`.", field_name(ident));
        quote! {
            #[doc = #doc]
            pub #ident: #ty,
        }
    });
    quote! { #(#tokens)* }
}

/// `name: source.name,` for each field.
pub fn moves(fields: &[Field<'_>], source: &Ident) -> TokenStream {
    let tokens = fields.iter().map(|field| {
        let ident = field.ident;
        quote! { #ident: #source.#ident, }
    });
    quote! { #(#tokens)* }
}

/// `target.name = source.name;` for each field.
pub fn assignments(fields: &[Field<'_>], target: &Ident, source: &Ident) -> TokenStream {
    let tokens = fields.iter().map(|field| {
        let ident = field.ident;
        quote! { #target.#ident = #source.#ident; }
    });
    quote! { #(#tokens)* }
}

/// Struct literal body covering every property of an entity.
///
/// Properties listed in `provided` are moved from `source`; all others are
/// filled with `Default::default()`.
pub fn literal_with_defaults(
    properties: &[PropertyDescriptor],
    provided: &[Field<'_>],
    source: &Ident
) -> TokenStream {
    let tokens = properties.iter().map(|property| {
        let ident = &property.ident;
        if provided.iter().any(|field| field.ident == ident) {
            quote! { #ident: #source.#ident, }
        } else {
            quote! { #ident: ::core::default::Default::default(), }
        }
    });
    quote! { #(#tokens)* }
}

fn field_name(ident: &Ident) -> String {
    syn::ext::IdentExt::unraw(ident).to_string()
}
