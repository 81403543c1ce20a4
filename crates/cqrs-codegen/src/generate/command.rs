// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command generation.
//!
//! # Generated Code
//!
//! For `Category { id: Uuid, name: String, products: Vec<Product> }`:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct CreateCategoryCommand {
//!     pub name: String,
//! }
//!
//! impl ::cqrs_core::Request for CreateCategoryCommand {
//!     type Response = Uuid;
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct UpdateCategoryCommand {
//!     pub id: Uuid,
//!     pub name: String,
//! }
//!
//! impl ::cqrs_core::Request for UpdateCategoryCommand {
//!     type Response = ();
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct RemoveCategoryCommand {
//!     pub id: Uuid,
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, mapping};
use crate::artifact::ArtifactKind;

/// `Create{E}Command`, answered with the new identifier.
pub fn create(ctx: &Context<'_>) -> TokenStream {
    let rt = ctx.rt();
    let vis = &ctx.entity.vis;
    let name = ctx.name(ArtifactKind::CreateCommand);
    let id_ty = &ctx.identifier.ty;
    let fields = mapping::declarations(&ctx.create_fields());
    let doc = format!("Create a new [`{}`].", ctx.entity.name_str());

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #fields
        }

        impl #rt::Request for #name {
            type Response = #id_ty;
        }
    }
}

/// `Update{E}Command`, replacing every simple property of one record.
pub fn update(ctx: &Context<'_>) -> TokenStream {
    let rt = ctx.rt();
    let vis = &ctx.entity.vis;
    let name = ctx.name(ArtifactKind::UpdateCommand);
    let fields = mapping::declarations(&ctx.update_fields());
    let doc = format!(
        "Update an existing [`{}`] located by `{}`.",
        ctx.entity.name_str(),
        ctx.identifier.ident
    );

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #fields
        }

        impl #rt::Request for #name {
            type Response = ();
        }
    }
}

/// `Remove{E}Command`, carrying only the identifier.
pub fn remove(ctx: &Context<'_>) -> TokenStream {
    let rt = ctx.rt();
    let vis = &ctx.entity.vis;
    let name = ctx.name(ArtifactKind::RemoveCommand);
    let id = &ctx.identifier.ident;
    let id_ty = &ctx.identifier.ty;
    let fields = mapping::declarations(&[ctx.identifier_field()]);
    let doc = format!("Remove the [`{}`] with the given identifier.", ctx.entity.name_str());

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #fields
        }

        impl #name {
            /// Target the record with this identifier.
            #[must_use]
            pub const fn new(#id: #id_ty) -> Self {
                Self { #id }
            }
        }

        impl #rt::Request for #name {
            type Response = ();
        }
    }
}
