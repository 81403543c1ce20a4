// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated artifact model.
//!
//! Each entity yields up to eleven artifacts. Their names are fixed by kind:
//!
//! | Kind | Name | Category |
//! |------|------|----------|
//! | `CreateCommand` | `Create{E}Command` | Command |
//! | `UpdateCommand` | `Update{E}Command` | Command |
//! | `RemoveCommand` | `Remove{E}Command` | Command |
//! | `GetByIdQuery` | `Get{E}ByIdQuery` | Query |
//! | `GetAllQuery` | `GetAll{E}sQuery` | Query |
//! | `QueryResult` | `Get{E}QueryResult` | Result |
//! | `CreateHandler` | `Create{E}CommandHandler` | Handler |
//! | `UpdateHandler` | `Update{E}CommandHandler` | Handler |
//! | `RemoveHandler` | `Remove{E}CommandHandler` | Handler |
//! | `GetByIdHandler` | `Get{E}ByIdQueryHandler` | Handler |
//! | `GetAllHandler` | `GetAll{E}sQueryHandler` | Handler |
//!
//! The plural in `GetAll{E}s` is a literal `s` suffix, not an inflection.

use std::fmt;

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use syn::Ident;

use crate::{config::GeneratorConfig, descriptor::EntityDescriptor};

/// Broad grouping of artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactCategory {
    /// State-changing request.
    Command,
    /// Read request.
    Query,
    /// Read projection.
    Result,
    /// Request handler.
    Handler
}

impl fmt::Display for ArtifactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Command => "command",
            Self::Query => "query",
            Self::Result => "result",
            Self::Handler => "handler"
        })
    }
}

/// Specific artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `Create{E}Command`.
    CreateCommand,
    /// `Update{E}Command`.
    UpdateCommand,
    /// `Remove{E}Command`.
    RemoveCommand,
    /// `Get{E}ByIdQuery`.
    GetByIdQuery,
    /// `GetAll{E}sQuery`.
    GetAllQuery,
    /// `Get{E}QueryResult`.
    QueryResult,
    /// `Create{E}CommandHandler`.
    CreateHandler,
    /// `Update{E}CommandHandler`.
    UpdateHandler,
    /// `Remove{E}CommandHandler`.
    RemoveHandler,
    /// `Get{E}ByIdQueryHandler`.
    GetByIdHandler,
    /// `GetAll{E}sQueryHandler`.
    GetAllHandler
}

impl ArtifactKind {
    /// Kinds generated for every entity, in emission order.
    pub const SHAPES: [Self; 6] = [
        Self::CreateCommand,
        Self::UpdateCommand,
        Self::RemoveCommand,
        Self::GetByIdQuery,
        Self::GetAllQuery,
        Self::QueryResult
    ];

    /// Kinds generated only when handlers are enabled, in emission order.
    pub const HANDLERS: [Self; 5] = [
        Self::CreateHandler,
        Self::UpdateHandler,
        Self::RemoveHandler,
        Self::GetByIdHandler,
        Self::GetAllHandler
    ];

    /// Category of this kind.
    pub const fn category(self) -> ArtifactCategory {
        match self {
            Self::CreateCommand | Self::UpdateCommand | Self::RemoveCommand => {
                ArtifactCategory::Command
            }
            Self::GetByIdQuery | Self::GetAllQuery => ArtifactCategory::Query,
            Self::QueryResult => ArtifactCategory::Result,
            _ => ArtifactCategory::Handler
        }
    }

    const fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Self::CreateCommand => ("Create", "Command"),
            Self::UpdateCommand => ("Update", "Command"),
            Self::RemoveCommand => ("Remove", "Command"),
            Self::GetByIdQuery => ("Get", "ByIdQuery"),
            Self::GetAllQuery => ("GetAll", "sQuery"),
            Self::QueryResult => ("Get", "QueryResult"),
            Self::CreateHandler => ("Create", "CommandHandler"),
            Self::UpdateHandler => ("Update", "CommandHandler"),
            Self::RemoveHandler => ("Remove", "CommandHandler"),
            Self::GetByIdHandler => ("Get", "ByIdQueryHandler"),
            Self::GetAllHandler => ("GetAll", "sQueryHandler")
        }
    }

    /// Type name of this artifact for `entity`.
    pub fn ident(self, entity: &EntityDescriptor) -> Ident {
        let (prefix, suffix) = self.affixes();
        entity.ident_with(prefix, suffix)
    }
}

/// One generated unit: a named type with its tokens and source text.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// Type name, e.g. `CreateCategoryCommand`.
    pub name: String,

    /// Artifact kind.
    pub kind: ArtifactKind,

    /// Entity the artifact was generated from.
    pub entity: String,

    /// Rendered tokens.
    pub tokens: TokenStream,

    /// Source text written by emitters.
    pub source_text: String
}

impl GeneratedArtifact {
    /// Wrap rendered tokens.
    pub fn new(
        kind: ArtifactKind,
        entity: &EntityDescriptor,
        tokens: TokenStream,
        config: &GeneratorConfig
    ) -> Self {
        let name = kind.ident(entity).to_string();
        let body = tokens.to_string();
        let source_text = if config.file_header {
            format!("{}{}\n", header(&name, &entity.name_str()), body)
        } else {
            format!("{body}\n")
        };
        Self {
            name,
            kind,
            entity: entity.name_str(),
            tokens,
            source_text
        }
    }

    /// Artifact category.
    pub fn category(&self) -> ArtifactCategory {
        self.kind.category()
    }

    /// Output file name: snake_case type name with `.rs`.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name.to_case(Case::Snake))
    }
}

fn header(artifact: &str, entity: &str) -> String {
    format!(
        "// @generated by cqrs-codegen. Do not edit.\n// {artifact} for entity `{entity}`.\n\n"
    )
}
