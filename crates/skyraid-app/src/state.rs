//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyraid_core::commands::PlayerCommand;
use skyraid_core::state::FrameSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// `mpsc::Sender` is wrapped in a `Mutex` so the state can be shared
/// across threads; the snapshot slot is shared with the game loop.
pub struct AppState {
    /// `None` until the game loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Written by the game loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the game loop. Returns false if no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Shorthand for forwarding a player command.
    pub fn send_player_command(&self, command: PlayerCommand) -> bool {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Copy of the most recent snapshot, if a frame has run.
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest().is_none());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send_player_command(PlayerCommand::StartSession));
    }

    #[test]
    fn test_send_reaches_receiver() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send_player_command(PlayerCommand::StartSession));
        assert!(state.send(GameLoopCommand::Shutdown));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
        ));
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Shutdown)));
    }
}
