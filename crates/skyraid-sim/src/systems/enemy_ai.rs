//! Enemy AI system — steers every enemy one frame and culls stragglers.
//!
//! Calls the pursuit logic from skyraid-pilot-ai, then writes the result
//! back into the registry.
//!
//! Pre: the player (if any) has already moved this frame.
//! Post: every enemy has moved; enemies that fell behind the player are
//! removed without an explosion.

use skyraid_core::enums::RemovalCause;

use skyraid_pilot_ai::pursuit::{evaluate, fell_behind, PursuitContext};

use crate::context::FrameContext;

/// Run the enemy AI stage. Walks the enemies in reverse so culls are index-safe.
pub fn run(ctx: &mut FrameContext) {
    let player_position = ctx.registry.player.map(|p| p.position);
    let elapsed_ms = ctx.now_ms();

    for index in (0..ctx.registry.enemies.len()).rev() {
        let enemy = &mut ctx.registry.enemies[index];
        let update = evaluate(&PursuitContext {
            position: enemy.position,
            player_position,
            index,
            jitter_phase: enemy.jitter_phase,
            elapsed_ms,
        });
        enemy.position = update.position;
        if let Some(yaw) = update.yaw {
            enemy.yaw = yaw;
        }

        if let Some(player) = player_position {
            if fell_behind(enemy.position, player) {
                let enemy = ctx
                    .registry
                    .remove_enemy(index, RemovalCause::FellBehind, &mut ctx.events);
                log::debug!("enemy {:?} fell behind and left the fight", enemy.id);
            }
        }
    }
}
