// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Every setting has a default matching the derive macro's behavior, so
//! `GeneratorConfig::default()` is what most build scripts want.
//!
//! | Setting | Default | Effect |
//! |---------|---------|--------|
//! | `runtime_path` | `::cqrs_core` | Path generated code uses for runtime traits |
//! | `default_id_type` | `i32` | Identifier type when the entity has no `id` field |
//! | `index_file` | `cqrs_generated.rs` | File written by [`FileEmitter::finish`](crate::FileEmitter::finish) |
//! | `file_header` | `true` | Prefix emitted files with a generated-code banner |

use syn::{Path, Type};

/// Default runtime crate path used by generated code.
pub fn default_runtime_path() -> Path {
    syn::parse_quote!(::cqrs_core)
}

/// Identifier type used when an entity declares no `id` field.
pub fn default_id_type() -> Type {
    syn::parse_quote!(i32)
}

/// Default name of the index file that includes every emitted artifact.
pub const DEFAULT_INDEX_FILE: &str = "cqrs_generated.rs";

/// Settings shared by every generation step of a run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path of the runtime crate (`Request`, `RequestHandler`, ...).
    pub runtime_path: Path,

    /// Identifier type used when no `id` property exists.
    pub default_id_type: Type,

    /// Name of the index file written by file emitters.
    pub index_file: String,

    /// Whether emitted source text starts with a generated-code banner.
    pub file_header: bool
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path:    default_runtime_path(),
            default_id_type: default_id_type(),
            index_file:      DEFAULT_INDEX_FILE.to_string(),
            file_header:     true
        }
    }
}

impl GeneratorConfig {
    /// Use a different runtime crate path, e.g. a re-export.
    #[must_use]
    pub fn with_runtime_path(mut self, path: Path) -> Self {
        self.runtime_path = path;
        self
    }

    /// Use a different fallback identifier type.
    #[must_use]
    pub fn with_default_id_type(mut self, ty: Type) -> Self {
        self.default_id_type = ty;
        self
    }

    /// Rename the index file.
    #[must_use]
    pub fn with_index_file(mut self, name: impl Into<String>) -> Self {
        self.index_file = name.into();
        self
    }

    /// Toggle the generated-code banner.
    #[must_use]
    pub fn with_file_header(mut self, enabled: bool) -> Self {
        self.file_header = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;

    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.runtime_path.to_token_stream().to_string(), ":: cqrs_core");
        assert_eq!(config.default_id_type.to_token_stream().to_string(), "i32");
        assert_eq!(config.index_file, "cqrs_generated.rs");
        assert!(config.file_header);
    }

    #[test]
    fn builder_overrides() {
        let config = GeneratorConfig::default()
            .with_runtime_path(syn::parse_quote!(crate::runtime))
            .with_default_id_type(syn::parse_quote!(u64))
            .with_index_file("all.rs")
            .with_file_header(false);
        assert_eq!(
            config.runtime_path.to_token_stream().to_string(),
            "crate :: runtime"
        );
        assert_eq!(config.default_id_type.to_token_stream().to_string(), "u64");
        assert_eq!(config.index_file, "all.rs");
        assert!(!config.file_header);
    }
}
