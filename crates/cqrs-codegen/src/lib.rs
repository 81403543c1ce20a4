// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CQRS artifact generation engine.
//!
//! Given a struct marked with `#[generate_cqrs]` (or `#[derive(GenerateCqrs)]`),
//! this crate derives a fixed family of request types from the struct's
//! fields alone:
//!
//! | Artifact | Contents | Response |
//! |----------|----------|----------|
//! | `Create{E}Command` | simple fields except `id` | identifier type |
//! | `Update{E}Command` | simple fields including `id` | `()` |
//! | `Remove{E}Command` | `id` | `()` |
//! | `Get{E}ByIdQuery` | `id` | `Get{E}QueryResult` |
//! | `GetAll{E}sQuery` | nothing | `Vec<Get{E}QueryResult>` |
//! | `Get{E}QueryResult` | simple fields including `id` | |
//!
//! With `#[generate_cqrs(true)]` it also generates one handler per request,
//! written against the [`cqrs-core`](https://docs.rs/cqrs-core) contracts.
//!
//! # Hosts
//!
//! The engine runs in two places:
//!
//! - **Derive host** (`cqrs-derive`): the compiler finds the marker and calls
//!   [`Generator::generate_tokens`].
//! - **Build host** (`build.rs`): [`Generator::run_dir`] scans source files,
//!   and a [`FileEmitter`] writes the artifacts into `OUT_DIR`.
//!
//! ```rust,ignore
//! // build.rs
//! use cqrs_codegen::{FileEmitter, Generator, GeneratorConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeneratorConfig::default();
//!     let mut emitter = FileEmitter::new(std::env::var("OUT_DIR")?, &config);
//!     Generator::new(config).run_dir("src/model", &mut emitter)?;
//!     emitter.finish()?;
//!     println!("cargo:rerun-if-changed=src/model");
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! scan ─► resolve ─► extract ─► generate ─► emit
//! ```
//!
//! Candidates that cannot be resolved, or whose marker does not match
//! exactly, are skipped without a diagnostic.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub mod artifact;
pub mod cache;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generate;
pub mod generator;
pub mod identifier;
pub mod marker;
pub mod resolve;
pub mod scan;

pub use artifact::{ArtifactCategory, ArtifactKind, GeneratedArtifact};
pub use cache::ArtifactCache;
pub use classify::{is_simple, is_simple_name};
pub use config::GeneratorConfig;
pub use descriptor::{EntityDescriptor, PropertyDescriptor};
pub use emit::{Emitter, FileEmitter, MemoryEmitter};
pub use error::{CodegenError, Result};
pub use extract::{SkipReason, extract};
pub use generator::{ArtifactSummary, Generator, RunReport};
pub use marker::{MARKER_ATTRIBUTE, MARKER_DERIVE, MarkerAnnotation};
pub use resolve::{SymbolResolver, SyntaxResolver, TypeSymbol};
pub use scan::{Candidate, scan_file, scan_source};
