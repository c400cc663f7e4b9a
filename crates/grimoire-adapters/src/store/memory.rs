//! In-memory entity store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use grimoire_core::{
    application::{ApplicationError, ports::EntityStore},
    domain::Entity,
    error::GrimoireResult,
};

struct Inner<E: Entity> {
    items: HashMap<E::Id, E>,
    order: Vec<E::Id>,
}

/// Thread-safe in-memory store for one entity family.
///
/// Clones share the same contents, so one store can back several services.
/// Listing returns entities in insertion order.
pub struct InMemoryStore<E: Entity> {
    inner: Arc<RwLock<Inner<E>>>,
}

impl<E: Entity> InMemoryStore<E> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                items: HashMap::new(),
                order: Vec::new(),
            })),
        }
    }

    /// Get the number of stored entities.
    pub fn len(&self) -> GrimoireResult<usize> {
        Ok(self.read()?.order.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> GrimoireResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove every entity.
    pub fn clear(&self) -> GrimoireResult<()> {
        let mut inner = self.write()?;
        inner.items.clear();
        inner.order.clear();
        Ok(())
    }

    fn read(&self) -> GrimoireResult<RwLockReadGuard<'_, Inner<E>>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn write(&self) -> GrimoireResult<RwLockWriteGuard<'_, Inner<E>>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn not_found(id: E::Id) -> ApplicationError {
        ApplicationError::NotFound {
            entity: E::SCHEMA.entity,
            id: id.to_string(),
        }
    }
}

impl<E: Entity> Clone for InMemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    fn insert(&self, entity: E) -> GrimoireResult<()> {
        let mut inner = self.write()?;
        let id = entity.id();

        if inner.items.contains_key(&id) {
            return Err(ApplicationError::DuplicateId {
                entity: E::SCHEMA.entity,
                id: id.to_string(),
            }
            .into());
        }

        inner.items.insert(id, entity);
        inner.order.push(id);
        Ok(())
    }

    fn update(&self, entity: E) -> GrimoireResult<()> {
        let mut inner = self.write()?;
        let id = entity.id();

        match inner.items.get_mut(&id) {
            Some(slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(Self::not_found(id).into()),
        }
    }

    fn get(&self, id: E::Id) -> GrimoireResult<E> {
        self.read()?
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id).into())
    }

    fn list(&self) -> GrimoireResult<Vec<E>> {
        let inner = self.read()?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.items.get(id).cloned())
            .collect())
    }

    fn contains(&self, id: E::Id) -> GrimoireResult<bool> {
        Ok(self.read()?.items.contains_key(&id))
    }
}
