//! Follow camera: trails behind and above the player and looks at it.

use skyraid_core::components::Player;
use skyraid_core::constants::{CAMERA_LERP, CAMERA_OFFSET, CAMERA_START};
use skyraid_core::types::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Vec3::from(CAMERA_START),
            look_at: Vec3::ZERO,
        }
    }
}

impl FollowCamera {
    /// Where the camera wants to sit for this player attitude.
    pub fn desired_position(player: &Player) -> Vec3 {
        player.position + player.orientation.rotate(Vec3::from(CAMERA_OFFSET))
    }

    /// Close part of the gap to the desired position and aim at the player.
    pub fn follow(&mut self, player: &Player) {
        let desired = Self::desired_position(player);
        self.position = self.position.lerp(desired, CAMERA_LERP);
        self.look_at = player.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyraid_core::types::{EntityId, Orientation};

    fn player_at(position: Vec3, orientation: Orientation) -> Player {
        Player {
            id: EntityId(0),
            position,
            orientation,
        }
    }

    #[test]
    fn test_desired_position_behind_and_above() {
        let player = player_at(Vec3::new(0.0, 1.0, 0.0), Orientation::default());
        let desired = FollowCamera::desired_position(&player);
        assert!((desired - Vec3::new(0.0, 7.0, 18.0)).length() < 1e-5);
    }

    #[test]
    fn test_camera_converges() {
        let player = player_at(Vec3::new(10.0, 20.0, -30.0), Orientation::from_yaw(1.0));
        let desired = FollowCamera::desired_position(&player);
        let mut camera = FollowCamera::default();
        let mut gap = (camera.position - desired).length();
        for _ in 0..50 {
            camera.follow(&player);
            let next = (camera.position - desired).length();
            assert!(next < gap);
            gap = next;
        }
        assert_eq!(camera.look_at, player.position);
        assert!(gap < 1.0);
    }
}
