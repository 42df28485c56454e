//! Enemy pursuit steering.
//!
//! Pure functions that move one enemy a single frame toward the player.
//! No registry dependency — operates on plain data.

use skyraid_core::constants::*;
use skyraid_core::types::{yaw_towards, Vec3};

/// Input to the pursuit step for a single enemy.
pub struct PursuitContext {
    pub position: Vec3,
    /// `None` once the player has been destroyed.
    pub player_position: Option<Vec3>,
    /// Index of the enemy in the registry; spreads the dodge phase.
    pub index: usize,
    pub jitter_phase: f32,
    /// Session clock driving the dodge sine.
    pub elapsed_ms: f64,
}

/// Output of the pursuit step.
pub struct PursuitUpdate {
    pub position: Vec3,
    /// New heading, or `None` to keep the current one.
    pub yaw: Option<f32>,
}

/// Advance one enemy by one frame.
pub fn evaluate(ctx: &PursuitContext) -> PursuitUpdate {
    let Some(player) = ctx.player_position else {
        return PursuitUpdate {
            position: cruise(ctx.position),
            yaw: None,
        };
    };

    let mut position = ctx.position;
    let dir = ground_direction(position, player);
    position.x += dir.x * ENEMY_CHASE_GAIN_X;
    position.z += dir.z * ENEMY_CHASE_GAIN_Z;
    position.y += altitude_correction(position.y, player.y);
    position.x += dodge_offset(ctx.elapsed_ms, ctx.index, ctx.jitter_phase);

    PursuitUpdate {
        position,
        yaw: Some(yaw_towards(position, player)),
    }
}

/// Straight-ahead flight with nobody to chase.
pub fn cruise(position: Vec3) -> Vec3 {
    position + Vec3::new(0.0, 0.0, ENEMY_CRUISE_SPEED)
}

/// Unit direction toward `to` in the ground plane. Zero when directly above or below.
pub fn ground_direction(from: Vec3, to: Vec3) -> Vec3 {
    let delta = to - from;
    Vec3::new(delta.x, 0.0, delta.z).normalize_or_zero()
}

/// Vertical creep that keeps an enemy 5–10 units above the player.
pub fn altitude_correction(altitude: f32, player_altitude: f32) -> f32 {
    if altitude < player_altitude + ENEMY_ALTITUDE_BAND_LOW {
        ENEMY_CLIMB_RATE
    } else if altitude > player_altitude + ENEMY_ALTITUDE_BAND_HIGH {
        -ENEMY_CLIMB_RATE
    } else {
        0.0
    }
}

/// Lateral dodge for this frame.
pub fn dodge_offset(elapsed_ms: f64, index: usize, jitter_phase: f32) -> f32 {
    let angle = elapsed_ms * ENEMY_JITTER_FREQUENCY + index as f64 + jitter_phase as f64;
    angle.sin() as f32 * ENEMY_JITTER_AMPLITUDE
}

/// True once an enemy has slipped past the player and out of the fight.
pub fn fell_behind(enemy: Vec3, player: Vec3) -> bool {
    enemy.z > player.z + ENEMY_BEHIND_CULL_DISTANCE
}
