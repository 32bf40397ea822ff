use crate::ecs::components::Transform;
use crate::engine::{Engine, Poolable};
use crate::error::PoolError;

/// Upper bound on pool size when the caller does not pick one.
pub const DEFAULT_MAX_POOL_SIZE: usize = 50;

/// Sizes for a new pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Entities instantiated up front. Clamped to `max_size`.
    pub initial_size: usize,
    /// Hard cap on the number of entities the pool will ever own.
    pub max_size: usize,
}

impl PoolConfig {
    pub fn new(initial_size: usize, max_size: usize) -> Self {
        Self {
            initial_size,
            max_size,
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_size: 0,
            max_size: DEFAULT_MAX_POOL_SIZE,
        }
    }
}

/// Point-in-time counts for one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: usize,
    pub active: usize,
    pub max_size: usize,
}

/// One slot of a pool. Activity lives on the engine entity itself, so a slot
/// whose entity was despawned behind the pool's back reads as available.
#[derive(Debug, Clone, Copy)]
struct PooledEntity<H> {
    entity: H,
}

impl<H: Copy + Eq + std::fmt::Debug> PooledEntity<H> {
    fn is_available<E: Engine<Entity = H>>(&self, engine: &E) -> bool {
        !engine.is_active(self.entity)
    }

    fn spawn<E: Engine<Entity = H>>(&self, engine: &mut E, transform: Transform) -> H {
        engine.set_transform(self.entity, transform);
        engine.set_active(self.entity, true);
        self.entity
    }
}

/// Fixed-capacity set of reusable entities cloned from one template.
///
/// The sequence only grows, and never past `max_size`. Spawn reuses the
/// first inactive entity in insertion order before instantiating a new one.
pub struct Pool<E: Engine> {
    entities: Vec<PooledEntity<E::Entity>>,
    template: E::Entity,
    parent: E::Entity,
    max_size: usize,
}

impl<E: Engine> Pool<E> {
    /// Build a pool and prewarm `min(initial_size, max_size)` inactive entities.
    ///
    /// A missing template or parent is replaced by an empty engine entity.
    pub fn new(
        engine: &mut E,
        template: Option<E::Entity>,
        config: PoolConfig,
        parent: Option<E::Entity>,
    ) -> Self {
        let template = template.unwrap_or_else(|| engine.create_empty("Pooled Object Default"));
        let parent = parent.unwrap_or_else(|| engine.create_empty("Pooled Objects Parent"));
        let initial = config.initial_size.min(config.max_size);

        let mut pool = Self {
            entities: Vec::with_capacity(initial),
            template,
            parent,
            max_size: config.max_size,
        };
        pool.grow(engine, initial);
        pool
    }

    /// Activate the first free entity at `transform`, growing by one if
    /// allowed. Capacity exhaustion is logged as a warning.
    pub fn spawn(&mut self, engine: &mut E, transform: Transform) -> Option<E::Entity> {
        self.try_spawn(engine, transform)
            .map_err(|e| e.report())
            .ok()
    }

    pub fn try_spawn(
        &mut self,
        engine: &mut E,
        transform: Transform,
    ) -> Result<E::Entity, PoolError> {
        let free = self
            .entities
            .iter()
            .position(|slot| slot.is_available(&*engine));
        if let Some(index) = free {
            let stale = self.entities[index].entity;
            if !engine.contains(stale) {
                log::warn!("Pooled entity {stale:?} no longer exists, replacing slot {index}");
                let fresh = self.instantiate_slot(engine, index);
                self.entities[index] = fresh;
            }
            return Ok(self.entities[index].spawn(engine, transform));
        }

        if self.entities.len() >= self.max_size {
            return Err(PoolError::CapacityExhausted {
                max_size: self.max_size,
            });
        }

        log::warn!(
            "Initial pool size reached ({}). Adding one object more.",
            self.entities.len()
        );
        let slot = self.instantiate_slot(engine, self.entities.len());
        self.entities.push(slot);
        Ok(slot.spawn(engine, transform))
    }

    /// Return `entity` to the pool. Entities without a pooling tag are
    /// rejected with an error log and left alone.
    pub fn destroy(&mut self, engine: &mut E, entity: E::Entity) {
        if let Err(e) = self.try_destroy(engine, entity) {
            e.report();
        }
    }

    /// Ownership by this pool is not checked: any pooled entity is accepted.
    pub fn try_destroy(&mut self, engine: &mut E, entity: E::Entity) -> Result<(), PoolError> {
        engine.poolable(entity).ok_or(PoolError::InvalidHandle)?;
        engine.set_active(entity, false);
        Ok(())
    }

    /// Prewarm up to `quantity` more inactive entities without passing
    /// `max_size`. Returns how many were added.
    pub fn expand(&mut self, engine: &mut E, quantity: usize) -> usize {
        let room = self.max_size - self.entities.len();
        let added = if quantity > room {
            log::warn!(
                "Expand by {quantity} exceeds max pool size ({}), adding {room}",
                self.max_size
            );
            room
        } else {
            quantity
        };
        self.grow(engine, added);
        added
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn template(&self) -> E::Entity {
        self.template
    }

    pub fn parent(&self) -> E::Entity {
        self.parent
    }

    /// Owned entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = E::Entity> + '_ {
        self.entities.iter().map(|slot| slot.entity)
    }

    /// Whether `entity` is one of this pool's slots.
    pub fn owns(&self, engine: &E, entity: E::Entity) -> bool {
        engine
            .poolable(entity)
            .and_then(|tag| self.entities.get(tag.slot))
            .is_some_and(|slot| slot.entity == entity)
    }

    pub fn active_count(&self, engine: &E) -> usize {
        self.entities
            .iter()
            .filter(|slot| !slot.is_available(engine))
            .count()
    }

    pub fn stats(&self, engine: &E) -> PoolStats {
        PoolStats {
            size: self.entities.len(),
            active: self.active_count(engine),
            max_size: self.max_size,
        }
    }

    fn grow(&mut self, engine: &mut E, quantity: usize) {
        for _ in 0..quantity {
            let slot = self.instantiate_slot(engine, self.entities.len());
            self.entities.push(slot);
        }
    }

    /// Instantiate, tag, deactivate and parent the entity for slot `index`.
    fn instantiate_slot(&self, engine: &mut E, index: usize) -> PooledEntity<E::Entity> {
        let entity = engine.instantiate(self.template);
        engine.attach_poolable(entity, Poolable { slot: index });
        engine.set_active(entity, false);
        engine.set_parent(entity, self.parent);
        PooledEntity { entity }
    }
}
