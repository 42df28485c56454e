//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start.
    #[default]
    Idle,
    /// Player alive, simulation running.
    Active,
    /// Player destroyed. The world keeps animating until restart.
    GameOver,
}

/// Role of a simulated entity. Selects its update and collision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
    Smoke,
    ExplosionParticle,
    Building,
}

/// Why an entity left the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalCause {
    /// Collided with another enemy.
    MidAir,
    /// Flew into a building.
    Building,
    /// Dropped below ground level.
    Ground,
    /// Hit by a bullet.
    Shot,
    /// A bullet consumed by hitting its target.
    Impact,
    /// Enemy fell too far behind the player.
    FellBehind,
    /// Projectile left the world radius.
    WorldEdge,
    /// Particle life ran out.
    Decayed,
    /// Session reset.
    Reset,
}
