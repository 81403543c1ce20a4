// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Proc-macro entry points for `cqrs-derive`.
//!
//! Use `cqrs-derive` instead of depending on this crate directly.
//!
//! The macros here only adapt compiler input; discovery, extraction and
//! generation live in `cqrs-codegen`.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

use cqrs_codegen::{Generator, GeneratorConfig};
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive CQRS commands, queries and a result projection for a struct.
///
/// # Generated Types
///
/// For an entity named `Category`:
///
/// - **`CreateCategoryCommand`**: simple fields except `id`; responds with the
///   identifier type
/// - **`UpdateCategoryCommand`**: simple fields including `id`; responds with
///   `()`
/// - **`RemoveCategoryCommand`**: `id` only, with `new(id)`
/// - **`GetCategoryByIdQuery`**: `id` only, with `new(id)`; responds with
///   `GetCategoryQueryResult`
/// - **`GetAllCategorysQuery`**: unit struct; responds with
///   `Vec<GetCategoryQueryResult>`
/// - **`GetCategoryQueryResult`**: simple fields including `id`
///
/// "Simple" means scalars, `String`, `Uuid`, `NaiveDate`, `NaiveDateTime`,
/// `SystemTime`, `DateTime<_>`, `OffsetDateTime`, `Decimal`, and `Option<T>`
/// of any of those. Other fields, including `Option<Category>`, are left out
/// of every generated type.
///
/// The identifier is the first field named `id` in any casing. Without one,
/// the identifier is `id: i32`.
///
/// # Handlers
///
/// `#[generate_cqrs(true)]` (or `#[generate_cqrs(generate_handlers = true)]`)
/// also generates `CreateCategoryCommandHandler<S>` and friends, each
/// implementing `cqrs_core::RequestHandler` over any
/// `S: cqrs_core::EntityStore<Category, Id = ...>`. The create handler fills
/// fields it does not receive with `Default::default()`.
///
/// # Example
///
/// ```rust,ignore
/// use cqrs_derive::GenerateCqrs;
/// use uuid::Uuid;
///
/// #[derive(GenerateCqrs)]
/// #[generate_cqrs(true)]
/// pub struct Category {
///     pub id: Uuid,
///     pub name: String,
///     pub products: Vec<Product>,
/// }
///
/// let command = CreateCategoryCommand { name: "Books".into() };
/// ```
///
/// Enums, tuple structs and generic structs generate nothing.
#[proc_macro_derive(GenerateCqrs, attributes(generate_cqrs))]
pub fn derive_generate_cqrs(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    Generator::new(GeneratorConfig::default())
        .generate_tokens(&input)
        .into()
}

/// Inert marker for build-script generation.
///
/// Returns the item unchanged. `cqrs_codegen::Generator::run_dir` finds
/// structs carrying it and writes their artifacts to `OUT_DIR`.
///
/// Do not combine with `#[derive(GenerateCqrs)]` on the same item while this
/// attribute is in scope; the derive reads `#[generate_cqrs(...)]` as its own
/// helper.
#[proc_macro_attribute]
pub fn generate_cqrs(_args: TokenStream, item: TokenStream) -> TokenStream {
    item
}
