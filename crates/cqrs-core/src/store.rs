// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-entity storage contract used by generated handlers.

/// Storage collection for one entity type.
///
/// Generated handlers bind their store as
/// `S: EntityStore<User, Id = Uuid>` and call:
///
/// | Handler | Calls |
/// |---------|-------|
/// | create | `add`, `save` |
/// | update | `find`, `update`, `save` |
/// | remove | `find`, `remove`, `save` |
/// | get by id | `find` |
/// | get all | `list` |
///
/// `add` returns the identifier the store assigned or accepted. Writes may
/// be buffered until `save`.
#[async_trait::async_trait]
pub trait EntityStore<E>: Send + Sync
where
    E: Send + 'static
{
    /// Identifier type used for lookups.
    type Id: Send + Sync;

    /// Error type for storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert a new record and return its identifier.
    async fn add(&self, entity: E) -> Result<Self::Id, Self::Error>;

    /// Find a record by identifier.
    async fn find(&self, id: &Self::Id) -> Result<Option<E>, Self::Error>;

    /// All records, read-only.
    async fn list(&self) -> Result<Vec<E>, Self::Error>;

    /// Replace the stored record that has the same identifier.
    async fn update(&self, entity: E) -> Result<(), Self::Error>;

    /// Delete a previously located record.
    async fn remove(&self, entity: E) -> Result<(), Self::Error>;

    /// Flush pending writes.
    async fn save(&self) -> Result<(), Self::Error>;
}

/// Access to an entity's identifier.
///
/// Needed by stores that key records themselves, such as
/// [`MemoryStore`](crate::MemoryStore).
///
/// # Example
///
/// ```rust
/// use cqrs_core::Identified;
///
/// struct Tag {
///     id:   u64,
///     name: String
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
/// ```
pub trait Identified {
    /// Identifier type.
    type Id: Clone + PartialEq + Send + Sync + 'static;

    /// Current identifier.
    fn id(&self) -> Self::Id;

    /// Overwrite the identifier.
    fn assign_id(&mut self, id: Self::Id);
}
