//! Simulation engine for Skyraid.
//!
//! Owns the entity registry, runs the frame pipeline once per frame,
//! and produces FrameSnapshots for the renderer.

pub mod context;
pub mod engine;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyraid_core as core;
