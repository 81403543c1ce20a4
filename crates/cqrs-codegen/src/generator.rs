// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Run orchestration.
//!
//! ```text
//! candidates ──► extract ──► generate ──► emit
//!                  │ skip (silent)
//!                  ▼
//!                 next
//! ```
//!
//! A [`Generator`] holds nothing between runs except an optional
//! [`ArtifactCache`] supplied by the caller.

use std::{fmt, path::Path};

use proc_macro2::TokenStream;
use syn::DeriveInput;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    artifact::{ArtifactCategory, ArtifactKind, GeneratedArtifact},
    cache::ArtifactCache,
    config::GeneratorConfig,
    descriptor::EntityDescriptor,
    emit::Emitter,
    error::{CodegenError, Result},
    extract::{describe, extract_or_skip},
    generate,
    resolve::{SymbolResolver, SyntaxResolver, TypeSymbol},
    scan::{Candidate, scan_source}
};

/// One emitted artifact, as recorded in a [`RunReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSummary {
    /// Type name.
    pub name: String,

    /// Entity it belongs to.
    pub entity: String,

    /// Artifact kind.
    pub kind: ArtifactKind,

    /// File name handed to the emitter.
    pub file_name: String
}

impl ArtifactSummary {
    fn of(artifact: &GeneratedArtifact) -> Self {
        Self {
            name:      artifact.name.clone(),
            entity:    artifact.entity.clone(),
            kind:      artifact.kind,
            file_name: artifact.file_name()
        }
    }

    /// Artifact category.
    pub fn category(&self) -> ArtifactCategory {
        self.kind.category()
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Candidates examined.
    pub candidates: usize,

    /// Candidates skipped during extraction.
    pub skipped: usize,

    /// Entities generated for, in processing order.
    pub entities: Vec<String>,

    /// Emitted artifacts, in emission order.
    pub artifacts: Vec<ArtifactSummary>
}

impl RunReport {
    /// Number of emitted artifacts.
    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    /// Emitted artifacts of one category.
    pub fn by_category(&self, category: ArtifactCategory) -> impl Iterator<Item = &ArtifactSummary> {
        self.artifacts.iter().filter(move |a| a.category() == category)
    }

    fn merge(&mut self, other: Self) {
        self.candidates += other.candidates;
        self.skipped += other.skipped;
        self.entities.extend(other.entities);
        self.artifacts.extend(other.artifacts);
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} candidates, {} entities, {} skipped, {} artifacts",
            self.candidates,
            self.entities.len(),
            self.skipped,
            self.artifacts.len()
        )
    }
}

/// Drives discovery, extraction, generation and emission.
///
/// # Example
///
/// ```rust
/// use cqrs_codegen::{Generator, GeneratorConfig, MemoryEmitter};
///
/// let source = r#"
///     #[generate_cqrs(true)]
///     pub struct Category {
///         pub id: i64,
///         pub name: String,
///     }
/// "#;
///
/// let mut emitter = MemoryEmitter::new();
/// let report = Generator::new(GeneratorConfig::default())
///     .run_sources([source], &mut emitter)
///     .unwrap();
///
/// assert_eq!(report.entities, ["Category"]);
/// assert_eq!(emitter.len(), 11);
/// ```
#[derive(Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
    cache:  Option<ArtifactCache>
}

impl Generator {
    /// Generator without a cache.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            cache: None
        }
    }

    /// Reuse artifacts from `cache` for unchanged descriptors.
    #[must_use]
    pub fn with_cache(mut self, cache: ArtifactCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Run configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Attached cache, if any.
    pub fn cache(&self) -> Option<&ArtifactCache> {
        self.cache.as_ref()
    }

    /// Detach the cache for reuse in a later run.
    pub fn into_cache(self) -> Option<ArtifactCache> {
        self.cache
    }

    /// All artifacts for one descriptor.
    pub fn generate_entity(&mut self, entity: &EntityDescriptor) -> Vec<GeneratedArtifact> {
        match self.cache.as_mut() {
            Some(cache) => cache.get_or_generate(entity, &self.config).to_vec(),
            None => generate::generate(entity, &self.config)
        }
    }

    /// Tokens for a `#[derive(GenerateCqrs)]` input.
    ///
    /// Inputs that cannot be resolved (enums, tuple structs, generics)
    /// produce no tokens.
    pub fn generate_tokens(&self, input: &DeriveInput) -> TokenStream {
        TypeSymbol::from_derive_input(input)
            .and_then(|symbol| describe(symbol).ok())
            .map(|entity| generate::generate_tokens(&entity, &self.config))
            .unwrap_or_default()
    }

    /// Process `candidates` in order and emit every artifact.
    ///
    /// # Errors
    ///
    /// Only emitter failures are returned. Skipped candidates are counted in
    /// the report.
    pub fn run(
        &mut self,
        candidates: &[Candidate],
        resolver: &dyn SymbolResolver,
        emitter: impl Emitter
    ) -> Result<RunReport> {
        let report = self.process(candidates, resolver, emitter)?;
        info!(%report, "cqrs generation finished");
        Ok(report)
    }

    fn process(
        &mut self,
        candidates: &[Candidate],
        resolver: &dyn SymbolResolver,
        mut emitter: impl Emitter
    ) -> Result<RunReport> {
        let mut report = RunReport {
            candidates: candidates.len(),
            ..RunReport::default()
        };

        for candidate in candidates {
            let Some(entity) = extract_or_skip(candidate, resolver) else {
                report.skipped += 1;
                continue;
            };

            let artifacts = self.generate_entity(&entity);
            debug!(
                entity = %entity.name(),
                artifacts = artifacts.len(),
                handlers = entity.generate_handlers,
                "generated entity"
            );

            for artifact in &artifacts {
                emitter.emit(&artifact.file_name(), &artifact.source_text)?;
                report.artifacts.push(ArtifactSummary::of(artifact));
            }
            report.entities.push(entity.name_str());
        }

        Ok(report)
    }

    /// Scan in-memory sources and run over their candidates.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Parse`] for invalid sources, or emitter
    /// failures.
    pub fn run_sources<'s>(
        &mut self,
        sources: impl IntoIterator<Item = &'s str>,
        emitter: impl Emitter
    ) -> Result<RunReport> {
        let mut candidates = Vec::new();
        for source in sources {
            candidates.extend(scan_source(source, None)?);
        }
        self.run(&candidates, &SyntaxResolver, emitter)
    }

    /// Scan every `.rs` file under `dir`, in path order, and run.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Walk`], [`CodegenError::Io`] or
    /// [`CodegenError::Parse`] for unreadable trees and files, or emitter
    /// failures.
    pub fn run_dir(&mut self, dir: impl AsRef<Path>, mut emitter: impl Emitter) -> Result<RunReport> {
        let dir = dir.as_ref();
        let mut report = RunReport::default();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }
            let source = std::fs::read_to_string(path).map_err(|err| CodegenError::io(path, err))?;
            let candidates = scan_source(&source, Some(path))?;
            report.merge(self.process(&candidates, &SyntaxResolver, &mut emitter)?);
        }

        info!(dir = %dir.display(), %report, "cqrs generation finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex}
    };

    use syn::parse_quote;

    use super::*;
    use crate::{emit::MemoryEmitter, scan::scan_source};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_info(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    const CATEGORY: &str = r#"
        #[generate_cqrs(true)]
        pub struct Category {
            pub id: Uuid,
            pub name: String,
            pub products: Vec<Product>,
        }
    "#;

    const PRODUCT: &str = r#"
        #[generate_cqrs]
        pub struct Product {
            pub id: i32,
            pub name: String,
            pub price: f64,
            pub category: Option<Category>,
        }
    "#;

    #[test]
    fn run_reports_entities_and_artifacts() {
        let mut emitter = MemoryEmitter::new();
        let report = Generator::default()
            .run_sources([CATEGORY, PRODUCT], &mut emitter)
            .unwrap();

        assert_eq!(report.candidates, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.entities, ["Category", "Product"]);
        assert_eq!(report.artifact_count(), 17);
        assert_eq!(report.by_category(ArtifactCategory::Handler).count(), 5);
        assert_eq!(emitter.len(), 17);
        assert_eq!(report.to_string(), "2 candidates, 2 entities, 0 skipped, 17 artifacts");
    }

    #[test]
    fn skipped_candidates_are_counted() {
        let source = r#"
            #[generate_cqrs] pub struct Wrapper(i32);
            #[generate_cqrs_v2] pub struct Legacy { id: i32 }
        "#;
        let mut emitter = MemoryEmitter::new();
        let report = Generator::default().run_sources([source], &mut emitter).unwrap();
        assert_eq!(report.candidates, 2);
        assert_eq!(report.skipped, 2);
        assert!(emitter.is_empty());
    }

    #[test]
    fn runs_are_idempotent() {
        let mut first = MemoryEmitter::new();
        let mut second = MemoryEmitter::new();
        let mut generator = Generator::default();
        generator.run_sources([CATEGORY], &mut first).unwrap();
        generator.run_sources([CATEGORY], &mut second).unwrap();
        assert_eq!(first.files(), second.files());
    }

    #[test]
    fn cache_is_used_across_runs() {
        let mut generator = Generator::default().with_cache(ArtifactCache::new());
        generator.run_sources([PRODUCT], MemoryEmitter::new()).unwrap();
        generator.run_sources([PRODUCT], MemoryEmitter::new()).unwrap();
        let cache = generator.into_cache().unwrap();
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn derive_tokens() {
        let generator = Generator::default();
        let input: DeriveInput = parse_quote! {
            #[derive(GenerateCqrs)]
            pub struct Product { pub id: i32, pub name: String }
        };
        let code = generator.generate_tokens(&input).to_string();
        assert!(code.contains("pub struct CreateProductCommand"));
        assert!(!code.contains("CommandHandler"));

        let input: DeriveInput = parse_quote! {
            #[derive(GenerateCqrs)]
            pub enum Status { Active }
        };
        assert!(generator.generate_tokens(&input).is_empty());
    }

    #[test]
    fn run_logs_summary() {
        let candidates = scan_source(PRODUCT, None).unwrap();
        let logs = capture_info(|| {
            Generator::default()
                .run(&candidates, &SyntaxResolver, MemoryEmitter::new())
                .unwrap();
        });
        assert!(logs.contains("cqrs generation finished"));
        assert!(logs.contains("1 candidates, 1 entities, 0 skipped, 6 artifacts"));
    }

    #[test]
    fn run_dir_logs_one_summary() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("category.rs"), CATEGORY).unwrap();
        std::fs::write(dir.path().join("product.rs"), PRODUCT).unwrap();
        let logs = capture_info(|| {
            Generator::default().run_dir(dir.path(), MemoryEmitter::new()).unwrap();
        });
        assert_eq!(logs.matches("cqrs generation finished").count(), 1);
        assert!(logs.contains("2 candidates, 2 entities, 0 skipped, 17 artifacts"));
    }
}
