// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier property resolution.
//!
//! The identifier is the first property named `id` in any casing. Entities
//! without one still get remove/get-by-id shapes, keyed by a field `id` of
//! the configured fallback type.

use proc_macro2::Span;
use syn::{Ident, Type};

use crate::descriptor::PropertyDescriptor;

/// Property name (case-insensitive) that marks the identifier.
pub const IDENTIFIER_NAME: &str = "id";

/// Whether `name` designates the identifier.
pub fn is_identifier_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(IDENTIFIER_NAME)
}

/// Resolved identifier of an entity.
#[derive(Debug, Clone)]
pub struct Identifier<'a> {
    /// Field name used in generated shapes.
    pub ident: Ident,

    /// Identifier type.
    pub ty: Type,

    /// Backing property, `None` when the fallback applies.
    pub property: Option<&'a PropertyDescriptor>
}

impl Identifier<'_> {
    /// Whether the entity declares the identifier itself.
    pub fn is_declared(&self) -> bool {
        self.property.is_some()
    }
}

/// Resolve the identifier among `properties`.
///
/// First match in declaration order wins; duplicates that differ only by
/// case are tolerated.
pub fn resolve_identifier<'a>(properties: &'a [PropertyDescriptor], fallback: &Type) -> Identifier<'a> {
    match properties.iter().find(|p| p.is_identifier) {
        Some(property) => Identifier {
            ident:    property.ident.clone(),
            ty:       property.ty.clone(),
            property: Some(property)
        },
        None => Identifier {
            ident:    Ident::new(IDENTIFIER_NAME, Span::call_site()),
            ty:       fallback.clone(),
            property: None
        }
    }
}
