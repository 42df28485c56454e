//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::input::{InputState, KeyCode};

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or restart after game over) a session.
    StartSession,
    /// A key went down or up.
    Key { key: KeyCode, pressed: bool },
    /// Replace the whole input record, for hosts that poll their own devices.
    SetInput { input: InputState },
}
