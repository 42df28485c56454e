//! Entity spawn factories for setting up a session.
//!
//! Creates the player, the static city and the enemy batch.

use rand::Rng;

use skyraid_core::components::*;
use skyraid_core::constants::*;
use skyraid_core::types::{Orientation, Vec3};

use crate::context::FrameContext;

/// Populate a fresh session: city, enemies, then the player.
pub fn setup_session(ctx: &mut FrameContext, building_count: usize, enemy_count: usize) {
    spawn_buildings(ctx, building_count);
    spawn_enemies(ctx, enemy_count);
    spawn_player(ctx);
}

/// Spawn the player level at the origin, just above the ground.
pub fn spawn_player(ctx: &mut FrameContext) {
    let player = Player {
        id: ctx.registry.allocate_id(),
        position: Vec3::new(0.0, PLAYER_SPAWN_ALTITUDE, 0.0),
        orientation: Orientation::default(),
    };
    ctx.registry.set_player(player, &mut ctx.events);
}

/// Scatter buildings over the city square. Each stands on the ground slab.
pub fn spawn_buildings(ctx: &mut FrameContext, count: usize) {
    for _ in 0..count {
        let width = ctx.rng.gen::<f32>() * BUILDING_WIDTH_SPREAD + BUILDING_MIN_WIDTH;
        let height = ctx.rng.gen::<f32>() * BUILDING_HEIGHT_SPREAD + BUILDING_MIN_HEIGHT;
        let depth = ctx.rng.gen::<f32>() * BUILDING_WIDTH_SPREAD + BUILDING_MIN_WIDTH;
        let x = (ctx.rng.gen::<f32>() - 0.5) * 2.0 * CITY_HALF_EXTENT;
        let z = (ctx.rng.gen::<f32>() - 0.5) * 2.0 * CITY_HALF_EXTENT;

        let building = Building {
            id: ctx.registry.allocate_id(),
            position: Vec3::new(x, height / 2.0 + BUILDING_BASE_Y, z),
            width,
            height,
            depth,
        };
        ctx.registry.push_building(building, &mut ctx.events);
    }
}

/// Spawn the enemy batch ahead of the player at random offsets.
pub fn spawn_enemies(ctx: &mut FrameContext, count: usize) {
    for _ in 0..count {
        let position = Vec3::new(
            (ctx.rng.gen::<f32>() - 0.5) * 2.0 * ENEMY_SPAWN_HALF_WIDTH,
            ctx.rng.gen::<f32>() * ENEMY_SPAWN_ALTITUDE_SPREAD + ENEMY_SPAWN_MIN_ALTITUDE,
            -ENEMY_SPAWN_MIN_RANGE - ctx.rng.gen::<f32>() * ENEMY_SPAWN_RANGE_SPREAD,
        );
        let jitter_phase = ctx.rng.gen_range(0.0..std::f32::consts::TAU);
        spawn_enemy(ctx, position, jitter_phase);
    }
}

/// Spawn one enemy at an exact position.
pub fn spawn_enemy(ctx: &mut FrameContext, position: Vec3, jitter_phase: f32) {
    let enemy = Enemy {
        id: ctx.registry.allocate_id(),
        position,
        yaw: 0.0,
        jitter_phase,
    };
    ctx.registry.push_enemy(enemy, &mut ctx.events);
}
