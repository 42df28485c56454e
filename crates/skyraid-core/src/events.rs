//! Events emitted by the simulation for the renderer and UI.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, RemovalCause};
use crate::types::{EntityId, Vec3};

/// Everything the host needs to mirror the registry into a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Add a scene object for a new entity.
    Spawned { id: EntityId, kind: EntityKind },
    /// Remove the scene object of a dead entity.
    Despawned {
        id: EntityId,
        kind: EntityKind,
        cause: RemovalCause,
    },
    /// An explosion burst started here.
    Explosion { position: Vec3 },
    /// Player bullet left the gun.
    PlayerFired,
    /// An enemy fired at the player.
    EnemyFired { enemy: EntityId },
    /// The player's aircraft was destroyed.
    PlayerDestroyed { cause: RemovalCause },
    /// The session ended. Emitted once per session.
    GameOver,
}
