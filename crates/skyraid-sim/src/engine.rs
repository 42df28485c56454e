//! Simulation engine — the frame driver.
//!
//! `SimulationEngine` owns the frame context, processes host commands,
//! runs the frame pipeline and produces `FrameSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::config::SimConfig;
use skyraid_core::enums::GamePhase;
use skyraid_core::input::InputState;
use skyraid_core::state::FrameSnapshot;
use skyraid_core::types::SimTime;

use crate::context::FrameContext;
use crate::registry::EntityRegistry;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the frame context and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    ctx: FrameContext,
    phase: GamePhase,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// Out-of-range values are clamped with a warning rather than rejected.
    pub fn new(config: SimConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{e}; clamping to usable values");
                config.sanitized()
            }
        };
        Self {
            ctx: FrameContext::new(&config),
            config,
            phase: GamePhase::default(),
            input: InputState::default(),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance one frame on the engine's own clock (`frame_ms` per frame).
    pub fn tick(&mut self) -> FrameSnapshot {
        // A StartSession in the queue resets the clock this frame runs on.
        self.process_commands();
        let now = self.ctx.time.elapsed_ms + self.config.frame_ms;
        self.tick_at(now)
    }

    /// Advance one frame to an external timestamp (milliseconds since session start).
    pub fn tick_at(&mut self, now_ms: f64) -> FrameSnapshot {
        self.process_commands();

        if self.phase != GamePhase::Idle {
            self.ctx.time.advance_to(now_ms);
            systems::run_frame(&mut self.ctx, &self.input);
            if self.ctx.game_over && self.phase == GamePhase::Active {
                self.phase = GamePhase::GameOver;
                log::info!(
                    "game over after {} frames: {} enemies destroyed",
                    self.ctx.time.frame,
                    self.ctx.stats.enemies_destroyed
                );
            }
        }

        let events = std::mem::take(&mut self.ctx.events);
        systems::snapshot::build_snapshot(&self.ctx, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.ctx.time
    }

    /// Input flags the next frame will read.
    pub fn input(&self) -> InputState {
        self.input
    }

    /// Get a read-only reference to the entity registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.ctx.registry
    }

    /// Mutable context access for tests that stage exact situations.
    #[cfg(test)]
    pub fn context_mut(&mut self) -> &mut FrameContext {
        &mut self.ctx
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
                    self.start_session();
                } else {
                    log::warn!("ignoring StartSession while a session is active");
                }
            }
            PlayerCommand::Key { key, pressed } => {
                self.input.apply_key(key, pressed);
            }
            PlayerCommand::SetInput { input } => {
                self.input = input;
            }
        }
    }

    /// Clear the world and populate a fresh session.
    fn start_session(&mut self) {
        self.ctx.reset_session();
        world_setup::setup_session(
            &mut self.ctx,
            self.config.building_count,
            self.config.enemy_count,
        );
        self.phase = GamePhase::Active;
        log::info!(
            "session started: {} enemies, {} buildings",
            self.ctx.registry.enemies.len(),
            self.ctx.registry.buildings.len()
        );
    }
}
