// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact generation: descriptor in, typed tokens out.
//!
//! Generation is a pure function of an [`EntityDescriptor`] and a
//! [`GeneratorConfig`]. No I/O and no shared state, so the same inputs always
//! produce token-for-token identical output.
//!
//! # Submodules
//!
//! - [`command`]: create, update and remove commands
//! - [`query`]: get-by-id and get-all queries
//! - [`result`]: the read projection
//! - [`handler`]: the five request handlers
//! - [`mapping`]: field declarations and field-to-field transfers

pub mod command;
pub mod handler;
pub mod mapping;
pub mod query;
pub mod result;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path};

use self::mapping::Field;
use crate::{
    artifact::{ArtifactKind, GeneratedArtifact},
    config::GeneratorConfig,
    descriptor::EntityDescriptor,
    identifier::Identifier
};

/// Everything a single generator needs, resolved once per entity.
#[derive(Debug)]
pub struct Context<'a> {
    /// Entity being generated for.
    pub entity: &'a EntityDescriptor,

    /// Run configuration.
    pub config: &'a GeneratorConfig,

    /// Resolved identifier.
    pub identifier: Identifier<'a>
}

impl<'a> Context<'a> {
    /// Resolve the identifier and bundle the inputs.
    pub fn new(entity: &'a EntityDescriptor, config: &'a GeneratorConfig) -> Self {
        Self {
            entity,
            config,
            identifier: entity.identifier(config)
        }
    }

    /// Runtime crate path.
    pub fn rt(&self) -> &Path {
        &self.config.runtime_path
    }

    /// Type name of artifact `kind`.
    pub fn name(&self, kind: ArtifactKind) -> Ident {
        kind.ident(self.entity)
    }

    /// Fields of the create command: simple, not the identifier.
    pub fn create_fields(&self) -> Vec<Field<'a>> {
        self.entity
            .payload_properties()
            .into_iter()
            .map(Field::from)
            .collect()
    }

    /// Fields of the update command.
    ///
    /// Every simple property, plus the identifier wherever it is declared.
    /// When the entity declares no identifier, the fallback `id` leads.
    pub fn update_fields(&self) -> Vec<Field<'_>> {
        let entity: &'a EntityDescriptor = self.entity;
        let declared = self.identifier.property;
        let mut fields = Vec::new();
        if declared.is_none() {
            fields.push(self.identifier_field());
        }
        for property in &entity.properties {
            if property.is_simple || declared.is_some_and(|id| std::ptr::eq(id, property)) {
                fields.push(Field::from(property));
            }
        }
        fields
    }

    /// Non-identifier fields assigned by the update handler.
    pub fn assigned_fields(&self) -> Vec<Field<'a>> {
        self.create_fields()
    }

    /// Fields of the result projection: every simple property.
    pub fn result_fields(&self) -> Vec<Field<'a>> {
        self.entity
            .simple_properties()
            .into_iter()
            .map(Field::from)
            .collect()
    }

    /// The identifier as a field.
    pub fn identifier_field(&self) -> Field<'_> {
        Field {
            ident: &self.identifier.ident,
            ty:    &self.identifier.ty
        }
    }
}

/// Render one artifact kind.
pub fn render(ctx: &Context<'_>, kind: ArtifactKind) -> TokenStream {
    match kind {
        ArtifactKind::CreateCommand => command::create(ctx),
        ArtifactKind::UpdateCommand => command::update(ctx),
        ArtifactKind::RemoveCommand => command::remove(ctx),
        ArtifactKind::GetByIdQuery => query::get_by_id(ctx),
        ArtifactKind::GetAllQuery => query::get_all(ctx),
        ArtifactKind::QueryResult => result::projection(ctx),
        ArtifactKind::CreateHandler => handler::create(ctx),
        ArtifactKind::UpdateHandler => handler::update(ctx),
        ArtifactKind::RemoveHandler => handler::remove(ctx),
        ArtifactKind::GetByIdHandler => handler::get_by_id(ctx),
        ArtifactKind::GetAllHandler => handler::get_all(ctx)
    }
}

/// Kinds produced for `entity`, in emission order.
pub fn kinds(entity: &EntityDescriptor) -> Vec<ArtifactKind> {
    let mut kinds = ArtifactKind::SHAPES.to_vec();
    if entity.generate_handlers {
        kinds.extend(ArtifactKind::HANDLERS);
    }
    kinds
}

/// Generate every artifact for `entity`.
///
/// Six artifacts always; eleven when handlers are enabled.
pub fn generate(entity: &EntityDescriptor, config: &GeneratorConfig) -> Vec<GeneratedArtifact> {
    let ctx = Context::new(entity, config);
    kinds(entity)
        .into_iter()
        .map(|kind| GeneratedArtifact::new(kind, entity, render(&ctx, kind), config))
        .collect()
}

/// Generate every artifact for `entity` as one token stream.
pub fn generate_tokens(entity: &EntityDescriptor, config: &GeneratorConfig) -> TokenStream {
    let ctx = Context::new(entity, config);
    let parts = kinds(entity).into_iter().map(|kind| render(&ctx, kind));
    quote! { #(#parts)* }
}
