//! Repository Layer - Core Traits
//!
//! Abstract interfaces for data access. The board only needs an
//! in-memory implementation, so every operation is synchronous.

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
pub trait Repository<T: Entity> {
    /// Unvalidated input for creating an entity
    type Draft;
    /// Partial update applied to an existing entity
    type Patch;

    /// Validate `draft` and append a new entity with a fresh ID
    fn create(&mut self, draft: &Self::Draft) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: T::Id) -> Option<&T>;

    /// All entities, in insertion order
    fn list(&self) -> &[T];

    /// Apply `patch` to the entity with `id`
    fn update(&mut self, id: T::Id, patch: Self::Patch) -> DomainResult<T>;

    /// Remove entity by ID. Returns the removed entity, `None` if absent.
    fn delete(&mut self, id: T::Id) -> Option<T>;
}

/// Extension for repositories that support text search
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Entities matching `query`, in insertion order
    fn search(&self, query: &str) -> Vec<&T>;
}
