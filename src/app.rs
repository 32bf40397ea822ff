use glam::{Quat, Vec3};
use instant::Instant;

use tinypool::ecs::components::{Transform, Velocity};
use tinypool::ecs::systems;
use tinypool::{Engine, PoolConfig, PoolError, PoolRegistry, WorldEngine};

/// Simulation tick length (seconds per tick).
const TICK_RATE: f32 = 1.0 / 60.0;
/// How many ticks the demo runs for.
const TICK_COUNT: u64 = 600;
/// How often to log pool stats (ticks).
const STATS_LOG_INTERVAL: u64 = 120;
/// Entities leaving this box are returned to their pool.
const ARENA_HALF_EXTENT: f32 = 100.0;

const BULLETS: &str = "bullets";
/// Bullets prewarmed at startup.
const BULLET_INITIAL: usize = 16;
const BULLET_MAX: usize = 48;
/// Bullets fired per tick.
const FIRE_RATE: usize = 2;
const BULLET_SPEED: f32 = 90.0;

const SPARKS: &str = "sparks";
const SPARK_INITIAL: usize = 8;
/// Extra sparks prewarmed right after creation.
const SPARK_PREWARM: usize = 24;
const SPARK_SPEED: f32 = 40.0;

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

/// Headless shooter: a turret fires bullets in random directions, bullets that
/// leave the arena are recycled and leave a spark behind.
struct Demo {
    engine: WorldEngine,
    pools: PoolRegistry<WorldEngine>,
    rng: fastrand::Rng,
    /// Reused each tick for entities that left the arena.
    expired: Vec<hecs::Entity>,
    tick_count: u64,
    spawn_failures: u64,
}

impl Demo {
    fn new() -> Result<Self, PoolError> {
        let mut engine = WorldEngine::new();
        let mut pools = PoolRegistry::new();

        let bullet = engine.spawn_template("Bullet", Transform::IDENTITY, Velocity(Vec3::ZERO));
        let bullet_group = engine.create_empty("Bullets");
        pools.create_pool_with(
            &mut engine,
            Some(bullet),
            BULLETS,
            PoolConfig::new(BULLET_INITIAL, BULLET_MAX),
            Some(bullet_group),
        )?;

        let spark = engine.spawn_template(
            "Spark",
            Transform::from_position(Vec3::ZERO).with_scale(Vec3::splat(0.25)),
            Velocity(Vec3::ZERO),
        );
        pools.create_pool(&mut engine, Some(spark), SPARKS, SPARK_INITIAL)?;
        pools.expand_pool(&mut engine, SPARKS, SPARK_PREWARM);

        Ok(Self {
            engine,
            pools,
            rng: fastrand::Rng::new(),
            expired: Vec::with_capacity(BULLET_MAX),
            tick_count: 0,
            spawn_failures: 0,
        })
    }

    fn tick(&mut self) {
        for _ in 0..FIRE_RATE {
            self.fire();
        }

        systems::tick(
            &mut self.engine.world,
            TICK_RATE,
            Vec3::splat(ARENA_HALF_EXTENT),
            &mut self.expired,
        );

        // Indexed loop: `expired` is a field and spawning needs `&mut self`.
        for i in 0..self.expired.len() {
            let entity = self.expired[i];
            let Some(transform) = self.engine.transform(entity) else {
                continue;
            };
            let is_bullet = self
                .pools
                .pool(BULLETS)
                .is_some_and(|pool| pool.owns(&self.engine, entity));
            let id = if is_bullet { BULLETS } else { SPARKS };
            self.pools.destroy(&mut self.engine, id, entity);

            if is_bullet {
                self.emit_spark(transform.position);
            }
        }

        self.tick_count += 1;
    }

    fn fire(&mut self) {
        let angle = self.rng.f32() * std::f32::consts::TAU;
        let dir = Vec3::new(angle.cos(), angle.sin(), 0.0);
        let transform = Transform::new(Vec3::ZERO, Quat::from_rotation_z(angle), Vec3::ONE);
        self.launch(BULLETS, transform, dir * BULLET_SPEED);
    }

    fn emit_spark(&mut self, at: Vec3) {
        let dir = Vec3::new(self.rng.f32() - 0.5, self.rng.f32() - 0.5, 0.0).normalize_or_zero();
        let transform = Transform::from_position(at).with_scale(Vec3::splat(0.25));
        self.launch(SPARKS, transform, dir * SPARK_SPEED);
    }

    fn launch(&mut self, id: &str, transform: Transform, velocity: Vec3) {
        let Some(entity) = self.pools.spawn(&mut self.engine, id, transform) else {
            self.spawn_failures += 1;
            return;
        };
        if let Err(e) = self.engine.world.insert_one(entity, Velocity(velocity)) {
            log::warn!("Spawned {entity:?} vanished before launch: {e}");
        }
    }

    fn log_stats(&self) {
        for id in [BULLETS, SPARKS] {
            if let Some(pool) = self.pools.pool(id) {
                let stats = pool.stats(&self.engine);
                log::info!(
                    "tick {} | {id}: {}/{} active, {} max",
                    self.tick_count,
                    stats.active,
                    stats.size,
                    stats.max_size,
                );
            }
        }
    }
}

/// Entry point: build the pools and run the fixed-step simulation.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut demo = Demo::new()?;
    log::info!("Pools ready: {}", demo.pools.len());

    let start = Instant::now();
    while demo.tick_count < TICK_COUNT {
        demo.tick();
        if demo.tick_count % STATS_LOG_INTERVAL == 0 {
            demo.log_stats();
        }
    }

    log::info!(
        "Ran {} ticks in {:.2}ms, {} spawns refused at capacity",
        demo.tick_count,
        start.elapsed().as_secs_f64() * 1000.0,
        demo.spawn_failures,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_builds_both_pools() {
        let demo = Demo::new().unwrap();

        let bullets = demo.pools.pool(BULLETS).unwrap();
        assert_eq!((bullets.len(), bullets.max_size()), (BULLET_INITIAL, BULLET_MAX));
        let sparks = demo.pools.pool(SPARKS).unwrap();
        assert_eq!(sparks.len(), SPARK_INITIAL + SPARK_PREWARM);
        assert_eq!(demo.engine.name(bullets.parent()).as_deref(), Some("Bullets"));
    }

    #[test]
    fn ticks_recycle_bullets_within_capacity() {
        let mut demo = Demo::new().unwrap();
        for _ in 0..STATS_LOG_INTERVAL {
            demo.tick();
        }

        let bullets = demo.pools.pool(BULLETS).unwrap().stats(&demo.engine);
        assert_eq!(bullets.size, BULLET_MAX);
        assert!(bullets.active > 0 && bullets.active <= bullets.size);
        // Firing outpaces the ~67 ticks a bullet needs to leave the arena.
        assert!(demo.spawn_failures > 0);
        assert!(demo.pools.pool(SPARKS).unwrap().len() <= tinypool::DEFAULT_MAX_POOL_SIZE);
        assert_eq!(demo.tick_count, STATS_LOG_INTERVAL);
    }
}
