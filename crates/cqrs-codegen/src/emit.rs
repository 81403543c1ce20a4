// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Emission sinks.
//!
//! An [`Emitter`] receives `(file_name, source_text)` pairs and decides what
//! to do with them. Two are provided:
//!
//! - [`MemoryEmitter`] keeps every pair, in order. Used by tests and by hosts
//!   that post-process output themselves.
//! - [`FileEmitter`] writes into a directory (typically `OUT_DIR`) and then
//!   an index file that `include!`s every artifact:
//!
//! ```rust,ignore
//! // build.rs
//! let out_dir = std::env::var("OUT_DIR")?;
//! let mut emitter = FileEmitter::new(&out_dir, &config);
//! generator.run_dir("src/model", &mut emitter)?;
//! emitter.finish()?;
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/cqrs_generated.rs"));
//! ```

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf}
};

use tracing::trace;

use crate::{
    config::GeneratorConfig,
    error::{CodegenError, Result}
};

/// Sink for generated source files.
pub trait Emitter {
    /// Accept one generated file.
    ///
    /// # Errors
    ///
    /// Implementation-defined; [`FileEmitter`] reports I/O failures.
    fn emit(&mut self, file_name: &str, source: &str) -> Result<()>;
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, file_name: &str, source: &str) -> Result<()> {
        (**self).emit(file_name, source)
    }
}

/// Collects emitted files in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryEmitter {
    files: Vec<(String, String)>
}

impl MemoryEmitter {
    /// Empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every emitted `(file_name, source)` pair, in emission order.
    pub fn files(&self) -> &[(String, String)] {
        &self.files
    }

    /// Emitted file names, in emission order.
    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Source of the last file emitted under `file_name`.
    pub fn source(&self, file_name: &str) -> Option<&str> {
        self.files
            .iter()
            .rev()
            .find(|(name, _)| name == file_name)
            .map(|(_, source)| source.as_str())
    }

    /// Number of emitted files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Take the collected files.
    pub fn into_files(self) -> Vec<(String, String)> {
        self.files
    }
}

impl Emitter for MemoryEmitter {
    fn emit(&mut self, file_name: &str, source: &str) -> Result<()> {
        self.files.push((file_name.to_string(), source.to_string()));
        Ok(())
    }
}

/// Writes emitted files into a directory.
///
/// Files whose content is unchanged are not rewritten, so their modification
/// time stays put and cargo does not rebuild dependents needlessly.
#[derive(Debug)]
pub struct FileEmitter {
    dir:        PathBuf,
    index_file: String,
    header:     bool,
    emitted:    BTreeSet<String>,
    written:    usize
}

impl FileEmitter {
    /// Emitter writing into `dir`, with index name and header from `config`.
    pub fn new(dir: impl Into<PathBuf>, config: &GeneratorConfig) -> Self {
        Self {
            dir:        dir.into(),
            index_file: config.index_file.clone(),
            header:     config.file_header,
            emitted:    BTreeSet::new(),
            written:    0
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files actually (re)written so far, index excluded.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write the index file including every emitted file once, by absolute
    /// path and in file-name order.
    ///
    /// Returns the index path.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Io`] when the index cannot be written.
    pub fn finish(&self) -> Result<PathBuf> {
        let mut index = String::new();
        if self.header {
            index.push_str("// @generated by cqrs-codegen. Do not edit.\n\n");
        }
        for file_name in &self.emitted {
            let target = self.dir.join(file_name).display().to_string();
            index.push_str(&format!("include!({target:?});\n"));
        }
        fs::create_dir_all(&self.dir).map_err(|err| CodegenError::io(&self.dir, err))?;
        let path = self.dir.join(&self.index_file);
        write_if_changed(&path, &index)?;
        trace!(path = %path.display(), files = self.emitted.len(), "wrote index");
        Ok(path)
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, file_name: &str, source: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|err| CodegenError::io(&self.dir, err))?;
        let path = self.dir.join(file_name);
        if write_if_changed(&path, source)? {
            self.written += 1;
            trace!(path = %path.display(), "wrote artifact");
        } else {
            trace!(path = %path.display(), "artifact unchanged");
        }
        self.emitted.insert(file_name.to_string());
        Ok(())
    }
}

/// Write `contents` unless the file already holds exactly that.
///
/// Returns whether the file was written.
fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        return Ok(false);
    }
    fs::write(path, contents).map_err(|err| CodegenError::io(path, err))?;
    Ok(true)
}
