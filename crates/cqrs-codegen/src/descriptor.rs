// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Normalized, generation-ready entity metadata.
//!
//! Every generator reads an [`EntityDescriptor`] and nothing else, which is
//! what makes generation deterministic.
//!
//! ```text
//! EntityDescriptor
//! ├── ident: Ident              (e.g. "Category")
//! ├── vis: Visibility           (propagated to generated types)
//! ├── generate_handlers: bool
//! └── properties: Vec<PropertyDescriptor>   (declaration order)
//!     └── PropertyDescriptor
//!         ├── ident: Ident
//!         ├── ty: Type
//!         ├── type_name: String ("Option<String>")
//!         ├── is_simple: bool
//!         └── is_identifier: bool
//! ```

use proc_macro2::Span;
use quote::ToTokens;
use syn::{Ident, Type, Visibility, ext::IdentExt};

use crate::{
    classify::is_simple,
    config::GeneratorConfig,
    identifier::{Identifier, is_identifier_name, resolve_identifier}
};

/// One property (named field) of an entity.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// Declared type as compact source text.
    pub type_name: String,

    /// Eligible for generated shapes.
    pub is_simple: bool,

    /// Named `id` in any casing.
    pub is_identifier: bool
}

impl PropertyDescriptor {
    /// Describe a field.
    pub fn new(ident: Ident, ty: Type) -> Self {
        let is_identifier = is_identifier_name(&ident.unraw().to_string());
        Self {
            type_name: type_display(&ty),
            is_simple: is_simple(&ty),
            is_identifier,
            ident,
            ty
        }
    }

    /// Field name without a raw-identifier prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Everything the generators need to know about one entity.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    /// Entity identifier (e.g. `Category`).
    pub ident: Ident,

    /// Visibility copied onto generated types.
    pub vis: Visibility,

    /// Properties in declaration order.
    pub properties: Vec<PropertyDescriptor>,

    /// Whether the five handlers are generated.
    pub generate_handlers: bool
}

impl EntityDescriptor {
    /// Entity name.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Entity name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Identifier with `prefix` and `suffix` around the entity name.
    ///
    /// ```rust,ignore
    /// entity.ident_with("Create", "Command")  // CreateCategoryCommand
    /// entity.ident_with("GetAll", "sQuery")   // GetAllCategorysQuery
    /// ```
    pub fn ident_with(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{}{}{}", prefix, self.name_str(), suffix),
            Span::call_site()
        )
    }

    /// Resolved identifier, falling back to `config.default_id_type`.
    pub fn identifier(&self, config: &GeneratorConfig) -> Identifier<'_> {
        resolve_identifier(&self.properties, &config.default_id_type)
    }

    /// All simple properties.
    pub fn simple_properties(&self) -> Vec<&PropertyDescriptor> {
        self.properties.iter().filter(|p| p.is_simple).collect()
    }

    /// Simple properties that are not the identifier.
    pub fn payload_properties(&self) -> Vec<&PropertyDescriptor> {
        self.properties
            .iter()
            .filter(|p| p.is_simple && !p.is_identifier)
            .collect()
    }

    /// Content hash over every field that influences generated output.
    ///
    /// Two descriptors hash equal only when they would produce identical
    /// artifacts under `config`.
    pub fn fingerprint(&self, config: &GeneratorConfig) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        let mut field = |bytes: &[u8]| {
            hasher.update(bytes);
            hasher.update(b"\0");
        };

        field(self.name_str().as_bytes());
        field(self.vis.to_token_stream().to_string().as_bytes());
        field(&[u8::from(self.generate_handlers)]);
        for property in &self.properties {
            field(property.ident.to_string().as_bytes());
            field(property.type_name.as_bytes());
            field(&[u8::from(property.is_simple), u8::from(property.is_identifier)]);
        }
        field(config.runtime_path.to_token_stream().to_string().as_bytes());
        field(config.default_id_type.to_token_stream().to_string().as_bytes());
        field(&[u8::from(config.file_header)]);

        hasher.finalize()
    }
}

/// Compact source text for a type: `Option<String>`, `uuid::Uuid`.
pub fn type_display(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let prev = out.chars().last();
            let next = chars.peek().copied();
            let glue = matches!(prev, Some('<' | ':' | '&' | '('))
                || matches!(next, Some('<' | '>' | ':' | ',' | ')'));
            if glue {
                continue;
            }
        }
        out.push(c);
    }
    out
}
