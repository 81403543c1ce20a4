// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Symbol resolution: candidate declaration to a structured type symbol.
//!
//! The engine never inspects raw syntax past this point. A resolver decides
//! what a candidate *is*; [`extract`](mod@crate::extract) decides whether it is
//! worth generating for.
//!
//! Two hosts produce symbols:
//!
//! - [`SyntaxResolver`] for the build host, which discovered the candidate by
//!   scanning source text and must re-validate the marker itself.
//! - [`TypeSymbol::from_derive_input`] for the derive host, where the compiler
//!   already invoked us because of the marker.

use syn::{Data, DeriveInput, Fields, Generics, Ident, ItemStruct, Type, Visibility};

use crate::{
    marker::{MarkerAnnotation, find_marker, helper_marker},
    scan::Candidate
};

/// A named field on a resolved type.
#[derive(Debug, Clone)]
pub struct FieldSymbol {
    /// Field name.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type
}

/// A resolved struct declaration.
#[derive(Debug, Clone)]
pub struct TypeSymbol {
    /// Type name.
    pub ident: Ident,

    /// Declared visibility.
    pub vis: Visibility,

    /// Exact marker, if the declaration carries one.
    pub marker: Option<MarkerAnnotation>,

    /// Named fields in declaration order.
    pub fields: Vec<FieldSymbol>
}

impl TypeSymbol {
    /// Resolve a struct item found by scanning.
    ///
    /// Returns `None` for tuple structs, unit structs and generic structs.
    pub fn from_item(item: &ItemStruct) -> Option<Self> {
        if is_generic(&item.generics) {
            return None;
        }
        Some(Self {
            ident:  item.ident.clone(),
            vis:    item.vis.clone(),
            marker: find_marker(&item.attrs),
            fields: named_fields(&item.fields)?
        })
    }

    /// Resolve a derive macro input.
    ///
    /// The derive invocation itself is the marker; arguments come from an
    /// optional `#[generate_cqrs(...)]` helper attribute. Returns `None` for
    /// enums, unions, tuple or unit structs and generic structs.
    pub fn from_derive_input(input: &DeriveInput) -> Option<Self> {
        let Data::Struct(data) = &input.data else {
            return None;
        };
        if is_generic(&input.generics) {
            return None;
        }
        Some(Self {
            ident:  input.ident.clone(),
            vis:    input.vis.clone(),
            marker: Some(helper_marker(&input.attrs).unwrap_or_default()),
            fields: named_fields(&data.fields)?
        })
    }
}

/// Host service that turns a candidate into a type symbol.
///
/// Returning `None` means "cannot be resolved"; the candidate is skipped
/// without a diagnostic.
pub trait SymbolResolver {
    /// Resolve one candidate.
    fn resolve(&self, candidate: &Candidate) -> Option<TypeSymbol>;
}

/// Resolver over parsed syntax; needs no semantic model.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxResolver;

impl SymbolResolver for SyntaxResolver {
    fn resolve(&self, candidate: &Candidate) -> Option<TypeSymbol> {
        TypeSymbol::from_item(&candidate.item)
    }
}

fn is_generic(generics: &Generics) -> bool {
    !generics.params.is_empty()
}

fn named_fields(fields: &Fields) -> Option<Vec<FieldSymbol>> {
    let Fields::Named(named) = fields else {
        return None;
    };
    named
        .named
        .iter()
        .map(|field| {
            field.ident.clone().map(|ident| FieldSymbol {
                ident,
                ty: field.ty.clone()
            })
        })
        .collect()
}
