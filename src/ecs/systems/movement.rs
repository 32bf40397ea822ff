use glam::Vec3;

use crate::ecs::components::{Active, Transform, Velocity};
use crate::engine::Poolable;

/// Integrate velocity into position for every active entity.
/// Inactive (pooled, despawned) entities are left where they were parked.
pub fn integrate(world: &mut hecs::World, dt: f32) {
    for (_, (transform, vel, active)) in
        world.query_mut::<(&mut Transform, &Velocity, &Active)>()
    {
        if !active.0 {
            continue;
        }
        transform.position += vel.0 * dt;
    }
}

/// Collect active pooled entities whose position left the box
/// `[-half_extent, half_extent]` on any axis.
pub fn out_of_bounds(world: &hecs::World, half_extent: Vec3, out: &mut Vec<hecs::Entity>) {
    out.clear();
    for (entity, (transform, active, _)) in
        world.query::<(&Transform, &Active, &Poolable)>().iter()
    {
        if active.0 && transform.position.abs().cmpgt(half_extent).any() {
            out.push(entity);
        }
    }
}
