//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `grimoire-adapters` crate provides implementations.

use crate::domain::Entity;
use crate::error::GrimoireResult;

/// Port for entity storage and retrieval.
///
/// Implemented by:
/// - `grimoire_adapters::store::InMemoryStore` (process-local)
///
/// Stores only ever hold domain models, so everything they return already
/// satisfies its constraints.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Store a newly created entity. Fails with `DuplicateId` if the id is taken.
    fn insert(&self, entity: E) -> GrimoireResult<()>;

    /// Replace a stored entity. Fails with `NotFound` if the id is unknown.
    fn update(&self, entity: E) -> GrimoireResult<()>;

    /// Get a specific entity by id.
    fn get(&self, id: E::Id) -> GrimoireResult<E>;

    /// All stored entities, in insertion order.
    fn list(&self) -> GrimoireResult<Vec<E>>;

    /// Whether an entity with this id is stored.
    fn contains(&self, id: E::Id) -> GrimoireResult<bool>;
}
