//! Frame snapshot — the complete visible state handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::types::{EntityId, Orientation, SimTime, Vec3};

/// Complete scene state after one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: Option<BodyView>,
    pub camera: CameraView,
    pub enemies: Vec<BodyView>,
    pub player_bullets: Vec<BodyView>,
    pub enemy_bullets: Vec<BodyView>,
    pub smoke: Vec<ParticleView>,
    pub explosions: Vec<ParticleView>,
    pub buildings: Vec<BuildingView>,
    pub stats: StatsView,
    /// Events raised since the previous snapshot, in order.
    pub events: Vec<SimEvent>,
}

/// A rigid body: aircraft or bullet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub id: EntityId,
    pub position: Vec3,
    pub orientation: Orientation,
}

/// A fading particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: EntityId,
    pub position: Vec3,
    pub opacity: f32,
    /// Rendered sphere radius (base radius times growth).
    pub radius: f32,
}

/// A static building box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: EntityId,
    pub position: Vec3,
    pub size: Vec3,
}

/// Follow camera pose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Running session totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub enemies_destroyed: u32,
    pub enemies_remaining: u32,
    pub shots_fired: u32,
    pub enemy_shots_fired: u32,
}
