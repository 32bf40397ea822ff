use std::collections::HashMap;

use crate::ecs::components::Transform;
use crate::engine::Engine;
use crate::error::PoolError;
use crate::pool::{Pool, PoolConfig};

/// Pools addressed by string ID.
///
/// Owned by the game loop and passed down by reference; the engine is handed
/// in per call so the registry never holds a borrow of the world.
pub struct PoolRegistry<E: Engine> {
    pools: HashMap<String, Pool<E>>,
}

impl<E: Engine> PoolRegistry<E> {
    pub fn new() -> Self {
        Self {
            pools: HashMap::new(),
        }
    }

    /// Drop every pool. Entities they created stay in the engine.
    pub fn initialize(&mut self) {
        self.pools.clear();
    }

    /// Create a pool with [`crate::pool::DEFAULT_MAX_POOL_SIZE`] and a
    /// placeholder parent group.
    pub fn create_pool(
        &mut self,
        engine: &mut E,
        template: Option<E::Entity>,
        id: &str,
        initial_size: usize,
    ) -> Result<(), PoolError> {
        let config = PoolConfig {
            initial_size,
            ..PoolConfig::default()
        };
        self.create_pool_with(engine, template, id, config, None)
    }

    /// Create a pool under `id`. A taken ID is rejected and the existing pool
    /// is kept.
    pub fn create_pool_with(
        &mut self,
        engine: &mut E,
        template: Option<E::Entity>,
        id: &str,
        config: PoolConfig,
        parent: Option<E::Entity>,
    ) -> Result<(), PoolError> {
        if self.pools.contains_key(id) {
            let err = PoolError::DuplicateId { id: id.to_owned() };
            err.report();
            return Err(err);
        }

        let pool = Pool::new(engine, template, config, parent);
        log::debug!(
            "Created pool {id:?}: {} prewarmed, max {}",
            pool.len(),
            pool.max_size()
        );
        self.pools.insert(id.to_owned(), pool);
        Ok(())
    }

    pub fn spawn(&mut self, engine: &mut E, id: &str, transform: Transform) -> Option<E::Entity> {
        self.try_spawn(engine, id, transform)
            .map_err(|e| e.report())
            .ok()
    }

    pub fn try_spawn(
        &mut self,
        engine: &mut E,
        id: &str,
        transform: Transform,
    ) -> Result<E::Entity, PoolError> {
        self.pool_mut(id, "spawn")?.try_spawn(engine, transform)
    }

    pub fn destroy(&mut self, engine: &mut E, id: &str, entity: E::Entity) {
        if let Err(e) = self.try_destroy(engine, id, entity) {
            e.report();
        }
    }

    pub fn try_destroy(&mut self, engine: &mut E, id: &str, entity: E::Entity) -> Result<(), PoolError> {
        self.pool_mut(id, "destroy")?.try_destroy(engine, entity)
    }

    pub fn expand_pool(&mut self, engine: &mut E, id: &str, quantity: usize) {
        if let Err(e) = self.try_expand_pool(engine, id, quantity) {
            e.report();
        }
    }

    /// Returns how many entities were actually added.
    pub fn try_expand_pool(
        &mut self,
        engine: &mut E,
        id: &str,
        quantity: usize,
    ) -> Result<usize, PoolError> {
        Ok(self.pool_mut(id, "expand a pool")?.expand(engine, quantity))
    }

    pub fn pool(&self, id: &str) -> Option<&Pool<E>> {
        self.pools.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pools.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    fn pool_mut(&mut self, id: &str, action: &'static str) -> Result<&mut Pool<E>, PoolError> {
        self.pools.get_mut(id).ok_or_else(|| PoolError::InvalidId {
            id: id.to_owned(),
            action,
        })
    }
}

impl<E: Engine> Default for PoolRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
