//! Enemy pilot AI for Skyraid.
//!
//! Pursuit steering, altitude keeping and gunnery decisions for enemy
//! fighters. Everything here is a pure function of plain data.

pub mod gunnery;
pub mod pursuit;

pub use skyraid_core as core;
