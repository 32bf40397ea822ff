use crate::ecs::components::Transform;

/// Tag attached to every entity a pool instantiates.
///
/// Its presence is what makes an entity destroyable through a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poolable {
    /// Index of the entity in its pool's sequence. Lets a pool check
    /// ownership without scanning.
    pub slot: usize,
}

/// What a pool needs from the host engine.
///
/// The pool holds handles only. Creating and tearing down the underlying
/// objects stays with the engine.
pub trait Engine {
    type Entity: Copy + Eq + std::fmt::Debug;

    /// Clone `template` into a new entity. The clone starts active.
    fn instantiate(&mut self, template: Self::Entity) -> Self::Entity;

    /// Create a bare named entity, used as placeholder template or group.
    fn create_empty(&mut self, name: &str) -> Self::Entity;

    /// Whether `entity` still exists. Inactive entities exist; despawned ones
    /// do not.
    fn contains(&self, entity: Self::Entity) -> bool;

    fn set_active(&mut self, entity: Self::Entity, active: bool);

    fn is_active(&self, entity: Self::Entity) -> bool;

    fn set_transform(&mut self, entity: Self::Entity, transform: Transform);

    fn set_parent(&mut self, entity: Self::Entity, parent: Self::Entity);

    fn attach_poolable(&mut self, entity: Self::Entity, tag: Poolable);

    /// Pooling tag of `entity`, or `None` if it was never pooled or is gone.
    fn poolable(&self, entity: Self::Entity) -> Option<Poolable>;
}
