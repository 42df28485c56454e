//! Systems that operate on the frame context each frame.
//!
//! Systems are plain functions over `&mut FrameContext`. They do not own
//! state — all state lives in the context. The order they run in is part
//! of the game rules and is fixed by [`FRAME_PIPELINE`].

pub mod camera;
pub mod collision;
pub mod effects;
pub mod enemy_ai;
pub mod enemy_fire;
pub mod player_control;
pub mod projectiles;
pub mod snapshot;

use serde::{Deserialize, Serialize};

use skyraid_core::input::InputState;

use crate::context::FrameContext;

/// One named stage of the per-frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameStage {
    /// Player attitude, flight, camera and gun.
    PlayerControl,
    /// Enemy pursuit and behind-player cull. Needs the player's new position.
    EnemyAi,
    /// Smoke spawn plus smoke/explosion decay.
    Effects,
    /// Bullet motion and world-edge cull.
    Projectiles,
    /// Collision checks and enemy volleys. Sees all motion of the frame.
    Collisions,
}

/// The per-frame update, in order.
pub const FRAME_PIPELINE: [FrameStage; 5] = [
    FrameStage::PlayerControl,
    FrameStage::EnemyAi,
    FrameStage::Effects,
    FrameStage::Projectiles,
    FrameStage::Collisions,
];

/// Run one stage.
pub fn run_stage(stage: FrameStage, ctx: &mut FrameContext, input: &InputState) {
    match stage {
        FrameStage::PlayerControl => player_control::run(ctx, input),
        FrameStage::EnemyAi => enemy_ai::run(ctx),
        FrameStage::Effects => effects::run(ctx),
        FrameStage::Projectiles => projectiles::run(ctx),
        FrameStage::Collisions => collision::run(ctx),
    }
}

/// Run the whole pipeline for one frame.
pub fn run_frame(ctx: &mut FrameContext, input: &InputState) {
    for stage in FRAME_PIPELINE {
        run_stage(stage, ctx, input);
    }
}
