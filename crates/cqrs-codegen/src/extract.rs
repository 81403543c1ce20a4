// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity descriptor extraction.
//!
//! Turns a candidate into an [`EntityDescriptor`], or skips it. Skipping is
//! never an error: the reason is logged at debug level and nothing else is
//! reported.

use tracing::debug;

use crate::{
    descriptor::{EntityDescriptor, PropertyDescriptor},
    resolve::{SymbolResolver, TypeSymbol},
    scan::Candidate
};

/// Why a candidate produced no descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The resolver could not interpret the declaration.
    Unresolved,

    /// The declaration mentions the marker but does not carry it exactly.
    MarkerMismatch
}

impl SkipReason {
    /// Short label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::MarkerMismatch => "marker mismatch"
        }
    }
}

/// Resolve `candidate` and build its descriptor.
pub fn extract(
    candidate: &Candidate,
    resolver: &dyn SymbolResolver
) -> Result<EntityDescriptor, SkipReason> {
    let symbol = resolver.resolve(candidate).ok_or(SkipReason::Unresolved)?;
    describe(symbol)
}

/// Build a descriptor from an already resolved symbol.
pub fn describe(symbol: TypeSymbol) -> Result<EntityDescriptor, SkipReason> {
    let marker = symbol.marker.ok_or(SkipReason::MarkerMismatch)?;
    let properties = symbol
        .fields
        .into_iter()
        .map(|field| PropertyDescriptor::new(field.ident, field.ty))
        .collect();

    Ok(EntityDescriptor {
        ident: symbol.ident,
        vis: symbol.vis,
        properties,
        generate_handlers: marker.generate_handlers()
    })
}

/// [`extract`] with the skip reason logged and discarded.
pub fn extract_or_skip(
    candidate: &Candidate,
    resolver: &dyn SymbolResolver
) -> Option<EntityDescriptor> {
    match extract(candidate, resolver) {
        Ok(entity) => Some(entity),
        Err(reason) => {
            debug!(
                candidate = %candidate.name(),
                origin = ?candidate.origin,
                reason = reason.as_str(),
                "skipping candidate"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;
    use crate::resolve::SyntaxResolver;

    fn candidate(item: syn::ItemStruct) -> Candidate {
        Candidate::new(item)
    }

    #[test]
    fn extracts_properties_in_declaration_order() {
        let entity = extract(
            &candidate(parse_quote! {
                #[generate_cqrs]
                pub struct Product {
                    pub id: i32,
                    pub name: String,
                    pub price: f64,
                    pub category: Option<Category>,
                    pub tags: Vec<String>
                }
            }),
            &SyntaxResolver
        )
        .unwrap();

        assert_eq!(entity.name_str(), "Product");
        assert!(!entity.generate_handlers);
        let names: Vec<String> = entity.properties.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["id", "name", "price", "category", "tags"]);
        assert_eq!(entity.simple_properties().len(), 3);
    }

    #[test]
    fn reads_handler_flag() {
        let entity = extract(
            &candidate(parse_quote! {
                #[generate_cqrs(true)]
                pub struct Category { pub id: Uuid }
            }),
            &SyntaxResolver
        )
        .unwrap();
        assert!(entity.generate_handlers);
    }

    #[test]
    fn unresolved_candidate_is_skipped() {
        let result = extract(
            &candidate(parse_quote! { #[generate_cqrs] pub struct Id(i32); }),
            &SyntaxResolver
        );
        assert_eq!(result.unwrap_err(), SkipReason::Unresolved);
    }

    #[test]
    fn near_miss_marker_is_skipped() {
        let result = extract(
            &candidate(parse_quote! { #[generate_cqrs_v2] pub struct Legacy { id: i32 } }),
            &SyntaxResolver
        );
        assert_eq!(result.unwrap_err(), SkipReason::MarkerMismatch);
    }

    #[test]
    fn skip_is_silent() {
        let skipped = extract_or_skip(
            &candidate(parse_quote! { #[generate_cqrs] pub struct Unit; }),
            &SyntaxResolver
        );
        assert!(skipped.is_none());
    }

    #[test]
    fn custom_resolver_is_honored() {
        struct Nothing;

        impl SymbolResolver for Nothing {
            fn resolve(&self, _: &Candidate) -> Option<TypeSymbol> {
                None
            }
        }

        let result = extract(
            &candidate(parse_quote! { #[generate_cqrs] pub struct Product { id: i32 } }),
            &Nothing
        );
        assert_eq!(result.unwrap_err(), SkipReason::Unresolved);
    }
}
