//! Skyraid host application.
//!
//! Runs the simulation engine on its own thread at the nominal frame rate
//! and publishes the latest snapshot for whoever draws or drives the game.

pub mod game_loop;
pub mod state;

pub use skyraid_core as core;
