pub mod movement;

use glam::Vec3;

/// Run the simulation systems for one fixed tick and collect the pooled
/// entities that should be returned to their pool.
pub fn tick(
    world: &mut hecs::World,
    dt: f32,
    half_extent: Vec3,
    expired: &mut Vec<hecs::Entity>,
) {
    // 1. Movement integration
    movement::integrate(world, dt);

    // 2. Bounds check
    movement::out_of_bounds(world, half_extent, expired);
}
