//! Fundamental geometric and simulation types.

use glam::{EulerRot, Quat};
use serde::{Deserialize, Serialize};

pub use glam::Vec3;

/// Local forward axis of an unrotated body (nose points down -Z).
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Stable handle for a simulated entity, unique within a session.
///
/// The renderer keys its scene objects by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Aircraft attitude in radians.
/// x = pitch (nose up positive), y = yaw (left positive), z = roll (left wing down positive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames run since the session started.
    pub frame: u64,
    /// Session clock in milliseconds. Monotonically non-decreasing.
    pub elapsed_ms: f64,
}

impl Orientation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Pure heading, no pitch or roll.
    pub fn from_yaw(yaw: f32) -> Self {
        Self {
            yaw,
            ..Self::default()
        }
    }

    /// Rotation applying yaw, then pitch, then roll.
    ///
    /// Intrinsic `YXZ` rather than `XYZ`: with pitch taken after yaw, pulling
    /// up climbs on every heading instead of diving once the nose points +Z.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }

    /// Rotate a body-local offset into world space.
    pub fn rotate(&self, local: Vec3) -> Vec3 {
        self.quat() * local
    }

    /// Unit vector along the nose.
    pub fn forward(&self) -> Vec3 {
        self.rotate(FORWARD)
    }
}

impl SimTime {
    /// Advance by one frame of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.advance_to(self.elapsed_ms + dt_ms);
    }

    /// Advance one frame to an externally supplied timestamp.
    /// Timestamps earlier than the current clock are clamped.
    pub fn advance_to(&mut self, now_ms: f64) {
        self.frame += 1;
        self.elapsed_ms = self.elapsed_ms.max(now_ms);
    }
}

/// Heading that points the forward axis from `from` toward `to` in the ground plane.
pub fn yaw_towards(from: Vec3, to: Vec3) -> f32 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    (-dx).atan2(-dz)
}
