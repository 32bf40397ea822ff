pub mod components;
pub mod systems;

use std::collections::HashMap;

use crate::ecs::components::{Active, Name, Parent, Transform, Velocity};
use crate::engine::{Engine, Poolable};

/// [`Engine`] adapter over a `hecs::World`.
///
/// Entities carry [`Transform`], [`Active`] and [`Name`]; pooled ones also
/// get a [`Poolable`] tag and a [`Parent`].
pub struct WorldEngine {
    pub world: hecs::World,
    /// Component sets cloned by `instantiate`, keyed by template entity.
    prefabs: HashMap<hecs::Entity, hecs::BuiltEntityClone>,
}

impl WorldEngine {
    pub fn new() -> Self {
        Self {
            world: hecs::World::new(),
            prefabs: HashMap::new(),
        }
    }

    /// Register `prefab` as a template and spawn its (inactive) template
    /// entity. Every component in the prefab is copied onto clones.
    pub fn spawn_prefab(&mut self, prefab: hecs::EntityBuilderClone) -> hecs::Entity {
        let prefab = prefab.build();
        let mut builder = hecs::EntityBuilder::new();
        builder.add_bundle(&prefab).add(Active(false));
        let template = self.world.spawn(builder.build());
        self.prefabs.insert(template, prefab);
        template
    }

    /// Template with a name, a transform and a velocity. Templates start
    /// inactive so they never show up in simulation queries themselves.
    pub fn spawn_template(
        &mut self,
        name: &str,
        transform: Transform,
        velocity: Velocity,
    ) -> hecs::Entity {
        let mut prefab = hecs::EntityBuilderClone::new();
        prefab.add(Name(name.to_owned())).add(transform).add(velocity);
        self.spawn_prefab(prefab)
    }

    pub fn transform(&self, entity: hecs::Entity) -> Option<Transform> {
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }

    pub fn parent(&self, entity: hecs::Entity) -> Option<hecs::Entity> {
        self.world.get::<&Parent>(entity).ok().map(|p| p.0)
    }

    pub fn name(&self, entity: hecs::Entity) -> Option<String> {
        self.world.get::<&Name>(entity).ok().map(|n| n.0.clone())
    }
}

impl Default for WorldEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for WorldEngine {
    type Entity = hecs::Entity;

    fn instantiate(&mut self, template: hecs::Entity) -> hecs::Entity {
        if !self.world.contains(template) || !self.prefabs.contains_key(&template) {
            log::warn!("Instantiating from unknown template {template:?}, using an empty entity");
            self.prefabs.remove(&template);
        }

        let mut builder = hecs::EntityBuilder::new();
        match self.prefabs.get(&template) {
            Some(prefab) => {
                builder.add_bundle(prefab);
            }
            None => {
                builder
                    .add(Name("Pooled Object".to_owned()))
                    .add(Transform::IDENTITY);
            }
        }
        builder.add(Active(true));
        self.world.spawn(builder.build())
    }

    fn create_empty(&mut self, name: &str) -> hecs::Entity {
        let mut prefab = hecs::EntityBuilderClone::new();
        prefab.add(Name(name.to_owned())).add(Transform::IDENTITY);
        self.spawn_prefab(prefab)
    }

    fn contains(&self, entity: hecs::Entity) -> bool {
        self.world.contains(entity)
    }

    fn set_active(&mut self, entity: hecs::Entity, active: bool) {
        match self.world.get::<&mut Active>(entity) {
            Ok(mut flag) => flag.0 = active,
            Err(e) => log::warn!("set_active on {entity:?}: {e}"),
        }
    }

    fn is_active(&self, entity: hecs::Entity) -> bool {
        self.world
            .get::<&Active>(entity)
            .map(|flag| flag.0)
            .unwrap_or(false)
    }

    fn set_transform(&mut self, entity: hecs::Entity, transform: Transform) {
        if let Err(e) = self.world.insert_one(entity, transform) {
            log::warn!("set_transform on {entity:?}: {e}");
        }
    }

    fn set_parent(&mut self, entity: hecs::Entity, parent: hecs::Entity) {
        if let Err(e) = self.world.insert_one(entity, Parent(parent)) {
            log::warn!("set_parent on {entity:?}: {e}");
        }
    }

    fn attach_poolable(&mut self, entity: hecs::Entity, tag: Poolable) {
        if let Err(e) = self.world.insert_one(entity, tag) {
            log::warn!("attach_poolable on {entity:?}: {e}");
        }
    }

    fn poolable(&self, entity: hecs::Entity) -> Option<Poolable> {
        self.world.get::<&Poolable>(entity).ok().map(|tag| *tag)
    }
}
