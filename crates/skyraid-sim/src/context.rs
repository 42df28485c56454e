//! Frame context — all mutable simulation state, passed explicitly to each system.
//!
//! Owned by `SimulationEngine`. Tests build one directly to drive a single
//! system without an engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::config::SimConfig;
use skyraid_core::events::SimEvent;
use skyraid_core::types::SimTime;

use crate::registry::EntityRegistry;
use crate::systems::camera::FollowCamera;

/// Cooldown bookkeeping. Each gun keeps a single "last shot" timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FireTimers {
    pub last_player_fire_ms: f64,
    /// Shared by every enemy.
    pub last_enemy_fire_ms: f64,
}

/// Running session totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
    pub enemy_shots_fired: u32,
}

/// Everything a system may read or mutate during a frame.
pub struct FrameContext {
    pub registry: EntityRegistry,
    pub rng: ChaCha8Rng,
    pub time: SimTime,
    pub timers: FireTimers,
    pub camera: FollowCamera,
    pub stats: SessionStats,
    /// Events raised since the last snapshot.
    pub events: Vec<SimEvent>,
    pub enemy_fire_chance: f64,
    /// Set when the player dies; keeps the game-over signal to one per session.
    pub game_over: bool,
}

impl FrameContext {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            registry: EntityRegistry::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
            timers: FireTimers::default(),
            camera: FollowCamera::default(),
            stats: SessionStats::default(),
            events: Vec::new(),
            enemy_fire_chance: config.enemy_fire_chance,
            game_over: false,
        }
    }

    /// Context seeded for tests and tools that only need a registry and an RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&SimConfig {
            seed,
            ..SimConfig::default()
        })
    }

    /// Current session clock.
    pub fn now_ms(&self) -> f64 {
        self.time.elapsed_ms
    }

    /// Forget per-session state. The RNG stream carries on.
    pub fn reset_session(&mut self) {
        self.registry.clear(&mut self.events);
        self.time = SimTime::default();
        self.timers = FireTimers::default();
        self.camera = FollowCamera::default();
        self.stats = SessionStats::default();
        self.game_over = false;
    }
}
