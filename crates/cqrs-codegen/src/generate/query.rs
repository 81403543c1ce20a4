// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query generation.
//!
//! `Get{E}ByIdQuery` answers one projection; `GetAll{E}sQuery` answers all of
//! them at once, without paging.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, mapping};
use crate::artifact::ArtifactKind;

/// `Get{E}ByIdQuery`.
pub fn get_by_id(ctx: &Context<'_>) -> TokenStream {
    let rt = ctx.rt();
    let vis = &ctx.entity.vis;
    let name = ctx.name(ArtifactKind::GetByIdQuery);
    let result = ctx.name(ArtifactKind::QueryResult);
    let id = &ctx.identifier.ident;
    let id_ty = &ctx.identifier.ty;
    let fields = mapping::declarations(&[ctx.identifier_field()]);
    let doc = format!("Fetch one [`{}`] by identifier.", ctx.entity.name_str());

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #fields
        }

        impl #name {
            /// Look up the record with this identifier.
            #[must_use]
            pub const fn new(#id: #id_ty) -> Self {
                Self { #id }
            }
        }

        impl #rt::Request for #name {
            type Response = #result;
        }
    }
}

/// `GetAll{E}sQuery`, a unit struct.
pub fn get_all(ctx: &Context<'_>) -> TokenStream {
    let rt = ctx.rt();
    let vis = &ctx.entity.vis;
    let name = ctx.name(ArtifactKind::GetAllQuery);
    let result = ctx.name(ArtifactKind::QueryResult);
    let doc = format!("Fetch every [`{}`].", ctx.entity.name_str());

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        #vis struct #name;

        impl #rt::Request for #name {
            type Response = ::std::vec::Vec<#result>;
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;
    use crate::{
        config::GeneratorConfig,
        descriptor::{EntityDescriptor, PropertyDescriptor}
    };

    fn category() -> EntityDescriptor {
        EntityDescriptor {
            ident:             parse_quote!(Category),
            vis:               parse_quote!(pub),
            properties:        vec![
                PropertyDescriptor::new(parse_quote!(id), parse_quote!(Uuid)),
                PropertyDescriptor::new(parse_quote!(name), parse_quote!(String))
            ],
            generate_handlers: false
        }
    }

    #[test]
    fn get_by_id_query() {
        let entity = category();
        let config = GeneratorConfig::default();
        let code = get_by_id(&Context::new(&entity, &config)).to_string();
        assert!(code.contains("pub struct GetCategoryByIdQuery"));
        assert!(code.contains("pub id : Uuid"));
        assert!(!code.contains("pub name"));
        assert!(code.contains("pub const fn new (id : Uuid) -> Self"));
        assert!(code.contains("type Response = GetCategoryQueryResult"));
    }

    #[test]
    fn get_all_query_is_unit() {
        let entity = category();
        let config = GeneratorConfig::default();
        let code = get_all(&Context::new(&entity, &config)).to_string();
        assert!(code.contains("pub struct GetAllCategorysQuery ;"));
        assert!(code.contains("Default"));
        assert!(code.contains("type Response = :: std :: vec :: Vec < GetCategoryQueryResult >"));
    }
}
