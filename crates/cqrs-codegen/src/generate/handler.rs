// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request handler generation.
//!
//! Each handler wraps a store and implements `RequestHandler` for one
//! request. Every failure leaves the handler as a `HandlerError` named after
//! the handler.
//!
//! # Generated Code
//!
//! For `Category { id: Uuid, name: String }`:
//!
//! ```rust,ignore
//! pub struct UpdateCategoryCommandHandler<S> {
//!     store: S,
//! }
//!
//! #[::cqrs_core::async_trait]
//! impl<S> ::cqrs_core::RequestHandler<UpdateCategoryCommand> for UpdateCategoryCommandHandler<S>
//! where
//!     S: ::cqrs_core::EntityStore<Category, Id = Uuid>,
//! {
//!     async fn handle(
//!         &self,
//!         request: UpdateCategoryCommand,
//!         cancel: &::cqrs_core::CancellationToken,
//!     ) -> Result<(), ::cqrs_core::HandlerError> {
//!         const OPERATION: &str = "UpdateCategoryCommandHandler";
//!         ::cqrs_core::ensure_active(cancel).map_err(|err| HandlerError::wrap(OPERATION, err))?;
//!         let mut entity = self.store.find(&request.id).await
//!             .map_err(|err| HandlerError::wrap(OPERATION, err))?
//!             .ok_or_else(|| HandlerError::wrap(OPERATION, NotFound::new("Category")))?;
//!         entity.name = request.name;
//!         self.store.update(entity).await.map_err(/* ... */)?;
//!         self.store.save().await.map_err(/* ... */)?;
//!         Ok(())
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{Context, mapping};
use crate::artifact::ArtifactKind;

/// `Create{E}CommandHandler`: build, add, save, return the new id.
pub fn create(ctx: &Context<'_>) -> TokenStream {
    let entity_ident = ctx.entity.name();
    let id_ty = &ctx.identifier.ty;
    let request = format_ident!("request");
    let literal =
        mapping::literal_with_defaults(&ctx.entity.properties, &ctx.create_fields(), &request);
    let wrap = wrap_err(ctx);

    let body = quote! {
        let entity = #entity_ident { #literal };
        let id = self.store.add(entity).await.map_err(#wrap)?;
        self.store.save().await.map_err(#wrap)?;
        Ok(id)
    };

    handler(
        ctx,
        ArtifactKind::CreateHandler,
        ArtifactKind::CreateCommand,
        quote! { #id_ty },
        &request,
        &body
    )
}

/// `Update{E}CommandHandler`: find, assign, update, save.
pub fn update(ctx: &Context<'_>) -> TokenStream {
    let request = format_ident!("request");
    let target = format_ident!("entity");
    let lookup = lookup(ctx, &request);
    let assignments = mapping::assignments(&ctx.assigned_fields(), &target, &request);
    let wrap = wrap_err(ctx);

    let body = quote! {
        #[allow(unused_mut)]
        let mut #target = #lookup;
        #assignments
        self.store.update(#target).await.map_err(#wrap)?;
        self.store.save().await.map_err(#wrap)?;
        Ok(())
    };

    handler(
        ctx,
        ArtifactKind::UpdateHandler,
        ArtifactKind::UpdateCommand,
        quote! { () },
        &request,
        &body
    )
}

/// `Remove{E}CommandHandler`: find, remove, save.
pub fn remove(ctx: &Context<'_>) -> TokenStream {
    let request = format_ident!("request");
    let lookup = lookup(ctx, &request);
    let wrap = wrap_err(ctx);

    let body = quote! {
        let entity = #lookup;
        self.store.remove(entity).await.map_err(#wrap)?;
        self.store.save().await.map_err(#wrap)?;
        Ok(())
    };

    handler(
        ctx,
        ArtifactKind::RemoveHandler,
        ArtifactKind::RemoveCommand,
        quote! { () },
        &request,
        &body
    )
}

/// `Get{E}ByIdQueryHandler`: find and project.
pub fn get_by_id(ctx: &Context<'_>) -> TokenStream {
    let result = ctx.name(ArtifactKind::QueryResult);
    let request = format_ident!("request");
    let source = format_ident!("entity");
    let lookup = lookup(ctx, &request);
    let moves = mapping::moves(&ctx.result_fields(), &source);

    let body = quote! {
        let #source = #lookup;
        Ok(#result { #moves })
    };

    handler(
        ctx,
        ArtifactKind::GetByIdHandler,
        ArtifactKind::GetByIdQuery,
        quote! { #result },
        &request,
        &body
    )
}

/// `GetAll{E}sQueryHandler`: list and project each record.
pub fn get_all(ctx: &Context<'_>) -> TokenStream {
    let result = ctx.name(ArtifactKind::QueryResult);
    let request = format_ident!("_request");
    let source = format_ident!("entity");
    let moves = mapping::moves(&ctx.result_fields(), &source);
    let wrap = wrap_err(ctx);

    let body = quote! {
        let records = self.store.list().await.map_err(#wrap)?;
        Ok(records
            .into_iter()
            .map(|#source| #result { #moves })
            .collect())
    };

    handler(
        ctx,
        ArtifactKind::GetAllHandler,
        ArtifactKind::GetAllQuery,
        quote! { ::std::vec::Vec<#result> },
        &request,
        &body
    )
}

/// Closure turning any cause into the handler's error.
fn wrap_err(ctx: &Context<'_>) -> TokenStream {
    let rt = ctx.rt();
    quote! { |err| #rt::HandlerError::wrap(OPERATION, err) }
}

/// Expression yielding the record addressed by `request`, or returning
/// a wrapped `NotFound`.
fn lookup(ctx: &Context<'_>, request: &syn::Ident) -> TokenStream {
    let rt = ctx.rt();
    let id = &ctx.identifier.ident;
    let entity_name = ctx.entity.name_str();
    let wrap = wrap_err(ctx);

    quote! {
        self.store
            .find(&#request.#id)
            .await
            .map_err(#wrap)?
            .ok_or_else(|| #rt::HandlerError::wrap(OPERATION, #rt::NotFound::new(#entity_name)))?
    }
}

/// Handler struct plus its `RequestHandler` impl around `body`.
fn handler(
    ctx: &Context<'_>,
    kind: ArtifactKind,
    request_kind: ArtifactKind,
    response: TokenStream,
    request: &syn::Ident,
    body: &TokenStream
) -> TokenStream {
    let rt = ctx.rt();
    let vis = &ctx.entity.vis;
    let entity_ident = ctx.entity.name();
    let id_ty = &ctx.identifier.ty;
    let name = ctx.name(kind);
    let operation = name.to_string();
    let request_ty = ctx.name(request_kind);
    let doc = format!(
        "Handles [`{}`] against a store of [`{}`] records.",
        request_ty,
        ctx.entity.name_str()
    );

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone)]
        #vis struct #name<S> {
            store: S
        }

        impl<S> #name<S> {
            /// Handler backed by `store`.
            #[must_use]
            pub const fn new(store: S) -> Self {
                Self { store }
            }

            /// Underlying store.
            pub const fn store(&self) -> &S {
                &self.store
            }
        }

        #[#rt::async_trait]
        impl<S> #rt::RequestHandler<#request_ty> for #name<S>
        where
            S: #rt::EntityStore<#entity_ident, Id = #id_ty>
        {
            async fn handle(
                &self,
                #request: #request_ty,
                cancel: &#rt::CancellationToken
            ) -> ::core::result::Result<#response, #rt::HandlerError> {
                const OPERATION: &str = #operation;
                #rt::ensure_active(cancel).map_err(|err| #rt::HandlerError::wrap(OPERATION, err))?;
                #body
            }
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
                PropertyDescriptor::new(parse_quote!(name), parse_quote!(String)),
                PropertyDescriptor::new(parse_quote!(products), parse_quote!(Vec<Product>))
            ],
            generate_handlers: true
        }
    }

    fn render(f: fn(&Context<'_>) -> TokenStream) -> String {
        let entity = category();
        let config = GeneratorConfig::default();
        f(&Context::new(&entity, &config)).to_string()
    }

    #[test]
    fn handler_shape() {
        let code = render(create);
        assert!(code.contains("pub struct CreateCategoryCommandHandler < S >"));
        assert!(code.contains("pub const fn new (store : S) -> Self"));
        assert!(code.contains("# [:: cqrs_core :: async_trait]"));
        assert!(code.contains(
            "impl < S > :: cqrs_core :: RequestHandler < CreateCategoryCommand > for CreateCategoryCommandHandler < S >"
        ));
        assert!(code.contains("S : :: cqrs_core :: EntityStore < Category , Id = Uuid >"));
        assert!(code.contains("const OPERATION : & str = \"CreateCategoryCommandHandler\""));
        assert!(code.contains(":: cqrs_core :: ensure_active (cancel)"));
    }

    #[test]
    fn create_builds_entity_explicitly() {
        let code = render(create);
        assert!(code.contains("Category { id : :: core :: default :: Default :: default () ,"));
        assert!(code.contains("name : request . name ,"));
        assert!(code.contains("products : :: core :: default :: Default :: default () ,"));
        assert!(code.contains("self . store . add (entity) . await"));
        assert!(code.contains("Ok (id)"));
    }

    #[test]
    fn update_assigns_non_identifier_fields() {
        let code = render(update);
        assert!(code.contains("self . store . find (& request . id)"));
        assert!(code.contains("entity . name = request . name ;"));
        assert!(!code.contains("entity . id = request . id"));
        assert!(!code.contains("products"));
        assert!(code.contains(":: cqrs_core :: NotFound :: new (\"Category\")"));
        assert!(code.contains("self . store . update (entity) . await"));
    }

    #[test]
    fn remove_finds_then_removes() {
        let code = render(remove);
        let find = code.find("find (& request . id)").unwrap();
        let remove = code.find("self . store . remove (entity)").unwrap();
        let save = code.find("self . store . save ()").unwrap();
        assert!(find < remove && remove < save);
    }

    #[test]
    fn get_by_id_projects_simple_fields() {
        let code = render(get_by_id);
        assert!(code.contains("Ok (GetCategoryQueryResult { id : entity . id , name : entity . name , })"));
    }

    #[test]
    fn get_all_maps_every_record() {
        let code = render(get_all);
        assert!(code.contains("self . store . list () . await"));
        assert!(code.contains(". map (| entity | GetCategoryQueryResult {"));
        assert!(code.contains("_request : GetAllCategorysQuery"));
        assert!(code.contains(":: std :: vec :: Vec < GetCategoryQueryResult >"));
    }
}
