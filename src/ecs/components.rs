use glam::{Quat, Vec3};

/// World-space placement applied to an entity on spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Identity rotation and unit scale at `position`.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Whether the entity is visible and simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Active(pub bool);

/// Display name, copied onto clones.
#[derive(Debug, Clone)]
pub struct Name(pub String);

/// Grouping entity this one is organized under.
#[derive(Debug, Clone, Copy)]
pub struct Parent(pub hecs::Entity);

/// Velocity in world units/second. Carried over from the template on clone.
#[derive(Debug, Clone, Copy)]
pub struct Velocity(pub Vec3);
