//! Enemy volley decision.
//!
//! One cooldown window is shared by every enemy. When it opens, each enemy
//! with a firing solution independently rolls to fire, and the window closes
//! again whether or not anyone fired.

use rand::Rng;

use skyraid_core::components::EnemyBullet;
use skyraid_core::constants::ENEMY_FIRE_COOLDOWN_MS;
use skyraid_core::events::SimEvent;

use skyraid_pilot_ai::gunnery::{aim_velocity, has_firing_solution};

use crate::context::FrameContext;

/// Run the volley decision. No-op without a player or inside the cooldown.
pub fn run(ctx: &mut FrameContext) {
    let Some(player) = ctx.registry.player else {
        return;
    };
    let now = ctx.now_ms();
    if now - ctx.timers.last_enemy_fire_ms <= ENEMY_FIRE_COOLDOWN_MS {
        return;
    }

    for index in 0..ctx.registry.enemies.len() {
        let enemy = ctx.registry.enemies[index];
        if !has_firing_solution(enemy.position, enemy.yaw, player.position) {
            continue;
        }
        if !ctx.rng.gen_bool(ctx.enemy_fire_chance) {
            continue;
        }

        let bullet = EnemyBullet {
            id: ctx.registry.allocate_id(),
            position: enemy.position,
            velocity: aim_velocity(enemy.position, player.position),
        };
        ctx.registry.push_enemy_bullet(bullet, &mut ctx.events);
        ctx.events.push(SimEvent::EnemyFired { enemy: enemy.id });
        ctx.stats.enemy_shots_fired += 1;
        log::debug!("enemy {:?} fired at the player", enemy.id);
    }

    ctx.timers.last_enemy_fire_ms = now;
}
