//! Entity pooling for hecs-style game worlds.
//!
//! A [`PoolRegistry`] owns named [`Pool`]s. Each pool recycles entities
//! cloned from one template, toggling them active and inactive through the
//! [`Engine`] trait instead of creating and destroying them.

pub mod ecs;
pub mod engine;
pub mod error;
pub mod pool;
pub mod registry;

#[cfg(test)]
mod testing;

pub use ecs::components::Transform;
pub use ecs::WorldEngine;
pub use engine::{Engine, Poolable};
pub use error::PoolError;
pub use pool::{Pool, PoolConfig, PoolStats, DEFAULT_MAX_POOL_SIZE};
pub use registry::PoolRegistry;
