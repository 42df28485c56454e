//! Entity records, one struct per role.
//!
//! Records are plain data with no behavior beyond trivial accessors.
//! Game logic lives in the simulation systems.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Orientation, Vec3};

/// The player's aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub position: Vec3,
    pub orientation: Orientation,
}

/// An enemy fighter. Its heading is derived from the pursuit each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
    pub yaw: f32,
    /// Per-enemy offset added to the dodge sine, drawn at spawn.
    pub jitter_phase: f32,
}

/// A player round. Flies along the attitude it was fired with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBullet {
    pub id: EntityId,
    pub position: Vec3,
    pub orientation: Orientation,
}

/// An enemy round with a fixed per-frame velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// One puff of the player's smoke trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Smoke {
    pub id: EntityId,
    pub position: Vec3,
    /// 1.0 at spawn, removed at or below 0.0.
    pub life: f32,
    pub opacity: f32,
}

/// One fragment of an explosion burst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionParticle {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub opacity: f32,
    /// Visual scale multiplier, grows each frame.
    pub scale: f32,
    /// Base sphere radius.
    pub radius: f32,
}

/// Static city block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: EntityId,
    /// Center of the box.
    pub position: Vec3,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Enemy {
    /// Body attitude: enemies fly level.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_yaw(self.yaw)
    }
}
