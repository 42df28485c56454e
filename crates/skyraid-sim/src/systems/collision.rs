//! Collision & interaction resolver.
//!
//! Distance-threshold checks run in a fixed order, each mutating the
//! registry before the next one looks at it. Later checks therefore never
//! see an enemy that an earlier, structural check already destroyed:
//!
//! 1. enemy vs enemy
//! 2. enemy vs building (first match in building order)
//! 3. enemy vs ground
//! 4. enemy volley decision
//! 5. enemy bullets vs player
//! 6. player bullets vs enemies
//! 7. player vs ground
//!
//! Pre: all motion for the frame is done.
//! Post: every destroyed entity is out of the registry and has its
//! explosion spawned; `ctx.game_over` is set if the player died.

use skyraid_core::constants::*;
use skyraid_core::enums::RemovalCause;
use skyraid_core::events::SimEvent;

use crate::context::FrameContext;
use crate::systems::{effects, enemy_fire};

/// Run every check in order.
pub fn run(ctx: &mut FrameContext) {
    enemy_vs_enemy(ctx);
    enemy_vs_building(ctx);
    enemy_vs_ground(ctx);
    enemy_fire::run(ctx);
    enemy_bullets_vs_player(ctx);
    player_bullets_vs_enemies(ctx);
    player_vs_ground(ctx);
}

/// Mid-air collisions destroy both enemies.
///
/// After removing pair (i, j) the scan restarts at index i, which now holds
/// the enemy that followed the removed one, so nothing is skipped or visited twice.
pub fn enemy_vs_enemy(ctx: &mut FrameContext) {
    let mut i = 0;
    while i < ctx.registry.enemies.len() {
        let a = ctx.registry.enemies[i].position;
        let hit = (i + 1..ctx.registry.enemies.len())
            .find(|&j| a.distance(ctx.registry.enemies[j].position) < ENEMY_COLLISION_RADIUS);

        match hit {
            Some(j) => {
                let b = ctx.registry.enemies[j].position;
                effects::spawn_explosion(ctx, a);
                effects::spawn_explosion(ctx, b);
                // j > i: remove the later one first so i stays valid.
                destroy_enemy(ctx, j, RemovalCause::MidAir);
                destroy_enemy(ctx, i, RemovalCause::MidAir);
            }
            None => i += 1,
        }
    }
}

/// Enemies inside a building's footprint radius crash into it.
pub fn enemy_vs_building(ctx: &mut FrameContext) {
    for index in (0..ctx.registry.enemies.len()).rev() {
        let position = ctx.registry.enemies[index].position;
        let crashed = ctx.registry.buildings.iter().any(|building| {
            position.distance(building.position)
                < building.width / 2.0 + BUILDING_COLLISION_MARGIN
        });
        if crashed {
            effects::spawn_explosion(ctx, position);
            destroy_enemy(ctx, index, RemovalCause::Building);
        }
    }
}

/// Enemies below ground level crash.
pub fn enemy_vs_ground(ctx: &mut FrameContext) {
    for index in (0..ctx.registry.enemies.len()).rev() {
        let position = ctx.registry.enemies[index].position;
        if position.y < GROUND_LEVEL {
            effects::spawn_explosion(ctx, position);
            destroy_enemy(ctx, index, RemovalCause::Ground);
        }
    }
}

/// The first enemy round within hit radius kills the player.
pub fn enemy_bullets_vs_player(ctx: &mut FrameContext) {
    let Some(player) = ctx.registry.player else {
        return;
    };
    let hit = (0..ctx.registry.enemy_bullets.len()).rev().find(|&i| {
        ctx.registry.enemy_bullets[i].position.distance(player.position) < BULLET_HIT_RADIUS
    });

    if let Some(index) = hit {
        destroy_player(ctx, RemovalCause::Shot);
        ctx.registry
            .remove_enemy_bullet(index, RemovalCause::Impact, &mut ctx.events);
    }
}

/// Each player round destroys at most one enemy, and is spent doing so.
pub fn player_bullets_vs_enemies(ctx: &mut FrameContext) {
    for b in (0..ctx.registry.player_bullets.len()).rev() {
        let bullet = ctx.registry.player_bullets[b].position;
        let hit = (0..ctx.registry.enemies.len())
            .rev()
            .find(|&e| bullet.distance(ctx.registry.enemies[e].position) < BULLET_HIT_RADIUS);

        if let Some(e) = hit {
            let position = ctx.registry.enemies[e].position;
            effects::spawn_explosion(ctx, position);
            destroy_enemy(ctx, e, RemovalCause::Shot);
            ctx.registry
                .remove_player_bullet(b, RemovalCause::Impact, &mut ctx.events);
        }
    }
}

/// The player crashes below ground level.
pub fn player_vs_ground(ctx: &mut FrameContext) {
    let crashed = ctx
        .registry
        .player
        .is_some_and(|p| p.position.y < GROUND_LEVEL);
    if crashed {
        destroy_player(ctx, RemovalCause::Ground);
    }
}

/// Remove an enemy and count the kill. The caller spawns the explosion.
fn destroy_enemy(ctx: &mut FrameContext, index: usize, cause: RemovalCause) {
    let enemy = ctx.registry.remove_enemy(index, cause, &mut ctx.events);
    ctx.stats.enemies_destroyed += 1;
    log::debug!("enemy {:?} destroyed ({cause:?})", enemy.id);
}

/// Blow up the player and signal game over, once per session.
fn destroy_player(ctx: &mut FrameContext, cause: RemovalCause) {
    let Some(player) = ctx.registry.take_player(cause, &mut ctx.events) else {
        return;
    };
    effects::spawn_explosion(ctx, player.position);
    ctx.events.push(SimEvent::PlayerDestroyed { cause });
    if !ctx.game_over {
        ctx.game_over = true;
        ctx.events.push(SimEvent::GameOver);
        log::info!(
            "player destroyed ({cause:?}) at {:?}, frame {}",
            player.position,
            ctx.time.frame
        );
    }
}
