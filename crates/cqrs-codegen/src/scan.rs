// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Candidate discovery over parsed source files.
//!
//! The scanner is deliberately loose: any struct whose attributes mention
//! the marker becomes a candidate. Exact validation happens later during
//! extraction. Scanning the same file twice yields the candidates twice.

use std::path::{Path, PathBuf};

use syn::{ItemStruct, visit::Visit};

use crate::{
    error::{CodegenError, Result},
    marker::mentions_marker
};

/// Origin label used for sources without a path.
pub const MEMORY_ORIGIN: &str = "<memory>";

/// A struct declaration that may be marked for generation.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The declaration as written.
    pub item: ItemStruct,

    /// Source file, when known.
    pub origin: Option<PathBuf>
}

impl Candidate {
    /// Candidate without a known origin.
    pub fn new(item: ItemStruct) -> Self {
        Self {
            item,
            origin: None
        }
    }

    /// Declared type name.
    pub fn name(&self) -> String {
        self.item.ident.to_string()
    }
}

struct MarkerScanner<'a> {
    origin:     Option<&'a Path>,
    candidates: Vec<Candidate>
}

impl<'ast> Visit<'ast> for MarkerScanner<'_> {
    fn visit_item_struct(&mut self, item: &'ast ItemStruct) {
        if mentions_marker(&item.attrs) {
            self.candidates.push(Candidate {
                item:   item.clone(),
                origin: self.origin.map(Path::to_path_buf)
            });
        }
        syn::visit::visit_item_struct(self, item);
    }
}

/// Collect candidates from a parsed file, in traversal order.
///
/// Inline modules and items nested in function bodies are visited.
pub fn scan_file(file: &syn::File, origin: Option<&Path>) -> Vec<Candidate> {
    let mut scanner = MarkerScanner {
        origin,
        candidates: Vec::new()
    };
    scanner.visit_file(file);
    scanner.candidates
}

/// Parse `source` and collect its candidates.
///
/// # Errors
///
/// Returns [`CodegenError::Parse`] when `source` is not a valid Rust file.
pub fn scan_source(source: &str, origin: Option<&Path>) -> Result<Vec<Candidate>> {
    let file = syn::parse_file(source).map_err(|source| CodegenError::Parse {
        origin: origin.map_or_else(|| MEMORY_ORIGIN.to_string(), |p| p.display().to_string()),
        source
    })?;
    Ok(scan_file(&file, origin))
}
