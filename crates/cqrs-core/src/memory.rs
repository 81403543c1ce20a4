// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-process [`EntityStore`] backed by a vector.

use std::{
    convert::Infallible,
    fmt,
    sync::atomic::{AtomicUsize, Ordering}
};

use parking_lot::RwLock;

use crate::store::{EntityStore, Identified};

/// Identifier generator used on insert.
type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// Vector-backed store for tests and prototypes.
///
/// Records keep insertion order. When built with
/// [`with_id_generator`](Self::with_id_generator) every added record gets a
/// fresh identifier, otherwise the identifier already on the record is kept.
///
/// # Example
///
/// ```rust
/// use cqrs_core::{EntityStore, Identified, MemoryStore};
///
/// #[derive(Clone)]
/// struct Tag {
///     id: u64
/// }
///
/// impl Identified for Tag {
///     type Id = u64;
///
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn assign_id(&mut self, id: u64) {
///         self.id = id;
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let store = MemoryStore::with_id_generator(|| 42);
///     let id = store.add(Tag { id: 0 }).await.unwrap();
///     assert_eq!(id, 42);
/// }
/// ```
pub struct MemoryStore<E: Identified> {
    records:      RwLock<Vec<E>>,
    id_generator: Option<IdGenerator<E::Id>>,
    saves:        AtomicUsize
}

impl<E: Identified> MemoryStore<E> {
    /// Empty store that keeps identifiers as given.
    pub fn new() -> Self {
        Self {
            records:      RwLock::new(Vec::new()),
            id_generator: None,
            saves:        AtomicUsize::new(0)
        }
    }

    /// Empty store that assigns `generator()` to every added record.
    pub fn with_id_generator<F>(generator: F) -> Self
    where
        F: Fn() -> E::Id + Send + Sync + 'static
    {
        Self {
            records:      RwLock::new(Vec::new()),
            id_generator: Some(Box::new(generator)),
            saves:        AtomicUsize::new(0)
        }
    }

    /// Store pre-populated with `records`.
    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records:      RwLock::new(records),
            id_generator: None,
            saves:        AtomicUsize::new(0)
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// How many times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<E: Identified + Clone> MemoryStore<E> {
    /// Copy of all records in insertion order.
    pub fn snapshot(&self) -> Vec<E> {
        self.records.read().clone()
    }
}

impl<E: Identified> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Identified> fmt::Debug for MemoryStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("records", &self.len())
            .field("generates_ids", &self.id_generator.is_some())
            .field("saves", &self.saves())
            .finish()
    }
}

#[async_trait::async_trait]
impl<E> EntityStore<E> for MemoryStore<E>
where
    E: Identified + Clone + Send + Sync + 'static
{
    type Id = E::Id;
    type Error = Infallible;

    async fn add(&self, mut entity: E) -> Result<E::Id, Infallible> {
        if let Some(generator) = &self.id_generator {
            entity.assign_id(generator());
        }
        let id = entity.id();
        self.records.write().push(entity);
        Ok(id)
    }

    async fn find(&self, id: &E::Id) -> Result<Option<E>, Infallible> {
        Ok(self.records.read().iter().find(|e| &e.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, Infallible> {
        Ok(self.snapshot())
    }

    async fn update(&self, entity: E) -> Result<(), Infallible> {
        let id = entity.id();
        let mut records = self.records.write();
        if let Some(slot) = records.iter_mut().find(|e| e.id() == id) {
            *slot = entity;
        }
        Ok(())
    }

    async fn remove(&self, entity: E) -> Result<(), Infallible> {
        let id = entity.id();
        self.records.write().retain(|e| e.id() != id);
        Ok(())
    }

    async fn save(&self) -> Result<(), Infallible> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id:   u32,
        text: String
    }

    impl Identified for Note {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn assign_id(&mut self, id: u32) {
            self.id = id;
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.to_string()
        }
    }

    #[tokio::test]
    async fn add_keeps_identifier_without_generator() {
        let store = MemoryStore::new();
        let id = store.add(note(5, "a")).await.unwrap();
        assert_eq!(id, 5);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn add_assigns_generated_identifier() {
        let counter = AtomicUsize::new(100);
        let store = MemoryStore::with_id_generator(move || counter.fetch_add(1, Ordering::SeqCst) as u32);
        let first = store.add(note(0, "a")).await.unwrap();
        let second = store.add(note(0, "b")).await.unwrap();
        assert_eq!((first, second), (100, 101));
        assert_eq!(store.find(&101).await.unwrap().unwrap().text, "b");
    }

    #[tokio::test]
    async fn update_replaces_matching_record() {
        let store = MemoryStore::with_records(vec![note(1, "old"), note(2, "other")]);
        store.update(note(1, "new")).await.unwrap();
        assert_eq!(store.snapshot(), vec![note(1, "new"), note(2, "other")]);
    }

    #[tokio::test]
    async fn remove_deletes_record() {
        let store = MemoryStore::with_records(vec![note(1, "a"), note(2, "b")]);
        store.remove(note(1, "a")).await.unwrap();
        assert_eq!(store.snapshot(), vec![note(2, "b")]);
        assert!(store.find(&1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_is_counted() {
        let store: MemoryStore<Note> = MemoryStore::default();
        store.save().await.unwrap();
        store.save().await.unwrap();
        assert_eq!(store.saves(), 2);
        assert!(store.is_empty());
    }
}
