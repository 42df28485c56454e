//! Enemy gunnery: when a shot is worth taking and where it goes.

use skyraid_core::constants::{ENEMY_BULLET_SPEED, ENEMY_ENGAGEMENT_RANGE, ENEMY_FIRE_CONE_DOT};
use skyraid_core::types::{Orientation, Vec3};

/// True if the player is inside the engagement range and the ~45 degree
/// cone ahead of the enemy's nose.
pub fn has_firing_solution(enemy: Vec3, enemy_yaw: f32, player: Vec3) -> bool {
    let to_player = player - enemy;
    if to_player.length() >= ENEMY_ENGAGEMENT_RANGE {
        return false;
    }
    let forward = Orientation::from_yaw(enemy_yaw).forward();
    forward.dot(to_player.normalize_or_zero()) > ENEMY_FIRE_CONE_DOT
}

/// Per-frame velocity of a round aimed at where the player is now.
/// Rounds do not re-track after launch.
pub fn aim_velocity(from: Vec3, target: Vec3) -> Vec3 {
    (target - from).normalize_or_zero() * ENEMY_BULLET_SPEED
}
