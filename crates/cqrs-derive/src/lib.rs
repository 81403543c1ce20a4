// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive CQRS request types and handlers from one struct definition.
//!
//! ```rust,ignore
//! use cqrs_derive::{CancellationToken, GenerateCqrs, MemoryStore, RequestHandler};
//!
//! #[derive(Debug, Clone, Default, GenerateCqrs)]
//! #[generate_cqrs(true)]
//! pub struct Category {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! let handler = CreateCategoryCommandHandler::new(MemoryStore::new());
//! let id = handler
//!     .handle(CreateCategoryCommand { name: "Books".into() }, &CancellationToken::new())
//!     .await?;
//! ```
//!
//! Generated code addresses the runtime as `::cqrs_core`, so depend on
//! `cqrs-core` alongside this crate. For build-script generation see
//! `cqrs-codegen`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub use cqrs_core::*;
pub use cqrs_derive_impl::{GenerateCqrs, generate_cqrs};
