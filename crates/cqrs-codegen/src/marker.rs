// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker attribute recognition and argument decoding.
//!
//! A type opts into generation with either spelling:
//!
//! ```rust,ignore
//! #[derive(GenerateCqrs)]
//! #[generate_cqrs(true)]          // optional: also generate handlers
//! pub struct Category { /* ... */ }
//!
//! #[generate_cqrs]                // inert marker read by the build host
//! pub struct Product { /* ... */ }
//! ```
//!
//! Recognition happens twice with different strictness:
//!
//! | Step | Function | Match |
//! |------|----------|-------|
//! | Discovery | [`mentions_marker`] | snake_case name *contains* `generate_cqrs` |
//! | Re-validation | [`find_marker`] | name *is* `generate_cqrs` / `GenerateCqrs` |
//!
//! So `#[generate_cqrs_v2]` is picked up as a candidate but then skipped.

use convert_case::{Case, Casing};
use darling::{FromMeta, ast::NestedMeta};
use syn::{Attribute, Meta, Path, Token, punctuated::Punctuated};

/// Marker identifier in attribute form.
pub const MARKER_ATTRIBUTE: &str = "generate_cqrs";

/// Marker identifier in derive form.
pub const MARKER_DERIVE: &str = "GenerateCqrs";

/// Name of the optional named argument.
const HANDLERS_ARGUMENT: &str = "generate_handlers";

/// A marker found on a type, with its raw arguments.
#[derive(Debug, Clone, Default)]
pub struct MarkerAnnotation {
    args: Vec<NestedMeta>
}

impl MarkerAnnotation {
    /// Marker without arguments.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Marker with already-parsed arguments.
    pub fn with_args(args: Vec<NestedMeta>) -> Self {
        Self {
            args
        }
    }

    /// Read the marker from an attribute.
    ///
    /// Unparseable argument lists are treated as "no arguments".
    pub fn from_attribute(attr: &Attribute) -> Self {
        match &attr.meta {
            Meta::List(list) => {
                Self::with_args(NestedMeta::parse_meta_list(list.tokens.clone()).unwrap_or_default())
            }
            _ => Self::bare()
        }
    }

    /// Number of arguments.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Whether handlers should be generated.
    ///
    /// `true` only when there is exactly one argument that coerces to a
    /// boolean (`true`, `generate_handlers = true`) and it is true.
    pub fn generate_handlers(&self) -> bool {
        match self.args.as_slice() {
            [single] => coerce_bool(single).unwrap_or(false),
            _ => false
        }
    }
}

fn coerce_bool(arg: &NestedMeta) -> Option<bool> {
    match arg {
        NestedMeta::Lit(lit) => bool::from_value(lit).ok(),
        NestedMeta::Meta(meta @ Meta::NameValue(nv)) if nv.path.is_ident(HANDLERS_ARGUMENT) => {
            bool::from_meta(meta).ok()
        }
        NestedMeta::Meta(_) => None
    }
}

/// Whether any attribute name, or any derived trait, contains the marker.
///
/// Names are compared in snake_case so that `GenerateCqrs`,
/// `generate_cqrs` and suffixed variants all match.
pub fn mentions_marker(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        path_contains_marker(attr.path()) || derived_paths(attr).iter().any(path_contains_marker)
    })
}

/// Exact marker lookup.
///
/// Returns the marker with its arguments when the attribute list has
/// `#[generate_cqrs...]` or a `#[derive(GenerateCqrs)]` entry. The attribute
/// form wins because only it carries arguments.
pub fn find_marker(attrs: &[Attribute]) -> Option<MarkerAnnotation> {
    if let Some(attr) = attrs.iter().find(|attr| is_marker_attribute(attr.path())) {
        return Some(MarkerAnnotation::from_attribute(attr));
    }

    attrs
        .iter()
        .flat_map(derived_paths)
        .any(|path| last_segment(&path).as_deref() == Some(MARKER_DERIVE))
        .then(MarkerAnnotation::bare)
}

/// Arguments of a `#[generate_cqrs(...)]` helper attribute, if present.
pub fn helper_marker(attrs: &[Attribute]) -> Option<MarkerAnnotation> {
    attrs
        .iter()
        .find(|attr| is_marker_attribute(attr.path()))
        .map(MarkerAnnotation::from_attribute)
}

fn is_marker_attribute(path: &Path) -> bool {
    last_segment(path).as_deref() == Some(MARKER_ATTRIBUTE)
}

fn path_contains_marker(path: &Path) -> bool {
    path.segments
        .iter()
        .any(|segment| segment.ident.to_string().to_case(Case::Snake).contains(MARKER_ATTRIBUTE))
}

fn last_segment(path: &Path) -> Option<String> {
    path.segments.last().map(|s| s.ident.to_string())
}

fn derived_paths(attr: &Attribute) -> Vec<Path> {
    if !attr.path().is_ident("derive") {
        return Vec::new();
    }
    attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
        .map(|paths| paths.into_iter().collect())
        .unwrap_or_default()
}
