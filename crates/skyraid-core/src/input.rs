//! Player input flags and the keyboard mapping that fills them.

use serde::{Deserialize, Serialize};

/// Steering and trigger state for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Physical keys the game listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    KeyA,
    KeyD,
    KeyW,
    KeyS,
    Space,
    /// Any key without a binding.
    Other,
}

impl InputState {
    /// Set (key down) or clear (key up) the flag bound to `key`.
    /// Unbound keys are ignored.
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool) {
        let flag = match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => &mut self.left,
            KeyCode::ArrowRight | KeyCode::KeyD => &mut self.right,
            KeyCode::ArrowUp | KeyCode::KeyW => &mut self.up,
            KeyCode::ArrowDown | KeyCode::KeyS => &mut self.down,
            KeyCode::Space => &mut self.fire,
            KeyCode::Other => return,
        };
        *flag = pressed;
    }
}
