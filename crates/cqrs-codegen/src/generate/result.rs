// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Get{E}QueryResult`: the read projection over every simple property.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, mapping};
use crate::artifact::ArtifactKind;

/// Render the projection struct.
pub fn projection(ctx: &Context<'_>) -> TokenStream {
    let vis = &ctx.entity.vis;
    let name = ctx.name(ArtifactKind::QueryResult);
    let fields = mapping::declarations(&ctx.result_fields());
    let doc = format!("Read projection of [`{}`].", ctx.entity.name_str());

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #fields
        }
    }
}
