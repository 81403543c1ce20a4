// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Simple-type classification.
//!
//! Only "simple" properties are copied into generated commands and result
//! projections. Anything else (references to other entities, collections,
//! domain types) is left out of every generated shape.
//!
//! # Rules
//!
//! | Type | Simple |
//! |------|--------|
//! | `bool`, `char`, `str`, `String` | yes |
//! | `i8`..`i128`, `isize`, `u8`..`u128`, `usize`, `f32`, `f64` | yes |
//! | `Option<T>` where `T` is simple | yes |
//! | `Uuid`, `NaiveDate`, `NaiveDateTime`, `SystemTime` | yes |
//! | `DateTime<_>`, `OffsetDateTime`, `Decimal` | yes |
//! | `Option<Category>`, `Option<Vec<_>>` | no |
//! | `Vec<_>`, `HashMap<_, _>`, `&T`, `(A, B)`, `[T; N]`, `Category` | no |
//!
//! Value types match by bare name or under their home crate
//! (`uuid::Uuid`, `chrono::DateTime<Utc>`); `crate::money::Decimal` is a
//! domain type.

use syn::{GenericArgument, Path, PathArguments, Type};

/// Intrinsic scalar types.
const SCALARS: &[&str] = &[
    "bool", "char", "str", "String", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
    "u32", "u64", "u128", "usize", "f32", "f64"
];

/// Well-known value types and the module paths they may be spelled under.
const VALUE_TYPES: &[(&str, &[&[&str]])] = &[
    ("Uuid", &[&["uuid"]]),
    ("NaiveDate", &[&["chrono"], &["chrono", "naive"]]),
    ("NaiveDateTime", &[&["chrono"], &["chrono", "naive"]]),
    ("DateTime", &[&["chrono"]]),
    ("SystemTime", &[&["std", "time"], &["core", "time"]]),
    ("OffsetDateTime", &[&["time"]]),
    ("Decimal", &[&["rust_decimal"], &["rust_decimal", "prelude"]])
];

/// Paths that name the optional-value wrapper.
const OPTION_PATHS: &[&[&str]] = &[
    &["Option"],
    &["std", "option", "Option"],
    &["core", "option", "Option"]
];

/// Whether `ty` may appear in generated shapes.
///
/// # Example
///
/// ```rust
/// use cqrs_codegen::is_simple;
///
/// assert!(is_simple(&syn::parse_quote!(String)));
/// assert!(is_simple(&syn::parse_quote!(Option<i64>)));
/// assert!(is_simple(&syn::parse_quote!(uuid::Uuid)));
/// assert!(!is_simple(&syn::parse_quote!(Option<Category>)));
/// assert!(!is_simple(&syn::parse_quote!(Vec<String>)));
/// ```
pub fn is_simple(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => is_simple_path(&type_path.path),
        Type::Group(group) => is_simple(&group.elem),
        Type::Paren(paren) => is_simple(&paren.elem),
        _ => false
    }
}

/// Classify a type given as source text.
///
/// Unparseable text is never simple.
pub fn is_simple_name(type_name: &str) -> bool {
    syn::parse_str::<Type>(type_name).is_ok_and(|ty| is_simple(&ty))
}

fn is_simple_path(path: &Path) -> bool {
    let segments = segment_names(path);
    let names: Vec<&str> = segments.iter().map(String::as_str).collect();

    if OPTION_PATHS.iter().any(|option| *option == names.as_slice()) {
        return option_argument(path).is_some_and(is_simple);
    }

    let Some((last, prefix)) = names.split_last() else {
        return false;
    };

    if prefix.is_empty() && SCALARS.contains(last) {
        return path.segments.last().is_some_and(|s| s.arguments.is_none());
    }

    if matches!(names.as_slice(), ["std" | "alloc", "string", "String"]) {
        return true;
    }

    VALUE_TYPES
        .iter()
        .find(|(name, _)| name == last)
        .is_some_and(|(_, homes)| prefix.is_empty() || homes.iter().any(|home| *home == prefix))
}

/// The single type argument of `Option<T>`.
fn option_argument(path: &Path) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &path.segments.last()?.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None
    });
    let ty = types.next()?;
    types.next().is_none().then_some(ty)
}

fn segment_names(path: &Path) -> Vec<String> {
    path.segments.iter().map(|s| s.ident.to_string()).collect()
}
