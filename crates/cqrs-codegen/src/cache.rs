// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Content-addressed artifact cache.
//!
//! Keys are [`EntityDescriptor::fingerprint`] hashes, never entity names:
//! renaming a property or flipping the handler flag changes the key, so a
//! stale entry can never be served.

use std::collections::HashMap;

use crate::{
    artifact::GeneratedArtifact,
    config::GeneratorConfig,
    descriptor::EntityDescriptor,
    generate::generate
};

/// Cache of generated artifacts keyed by descriptor content.
#[derive(Debug, Default, Clone)]
pub struct ArtifactCache {
    entries: HashMap<blake3::Hash, Vec<GeneratedArtifact>>,
    hits:    usize,
    misses:  usize
}

impl ArtifactCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts for `entity`, generating them on a miss.
    pub fn get_or_generate(
        &mut self,
        entity: &EntityDescriptor,
        config: &GeneratorConfig
    ) -> &[GeneratedArtifact] {
        let key = entity.fingerprint(config);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.entries
            .entry(key)
            .or_insert_with(|| generate(entity, config))
    }

    /// Whether artifacts for this exact descriptor are cached.
    pub fn contains(&self, entity: &EntityDescriptor, config: &GeneratorConfig) -> bool {
        self.entries.contains_key(&entity.fingerprint(config))
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to generate.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop every entry and reset counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
