// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors raised by the build host.
//!
//! Only I/O and parsing can fail. Discovery and extraction never produce an
//! error: a candidate that cannot be used is skipped.

use std::path::PathBuf;

/// Build-host failure.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Reading a source file or writing an artifact failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path:   PathBuf,
        /// Underlying error.
        source: std::io::Error
    },

    /// A source file is not valid Rust.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// File path, or `<memory>` for in-memory sources.
        origin: String,
        /// Parser error with span information.
        source: syn::Error
    },

    /// Directory traversal failed.
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error)
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }
}

/// Result alias for the build host.
pub type Result<T> = std::result::Result<T, CodegenError>;
