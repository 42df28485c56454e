//! Effects spawner: the player's smoke trail and explosion bursts.
//!
//! Pre: the player has moved this frame.
//! Post: one fresh smoke puff trails the player (if alive); every smoke
//! puff and explosion fragment has decayed one frame, and spent ones are gone.

use rand::Rng;

use skyraid_core::components::{ExplosionParticle, Smoke};
use skyraid_core::constants::*;
use skyraid_core::events::SimEvent;
use skyraid_core::types::Vec3;

use crate::context::FrameContext;

/// Run the effects stage.
pub fn run(ctx: &mut FrameContext) {
    spawn_smoke(ctx);
    decay_smoke(ctx);
    decay_explosions(ctx);
}

/// Drop one smoke puff behind the player.
pub fn spawn_smoke(ctx: &mut FrameContext) {
    let Some(player) = ctx.registry.player else {
        return;
    };
    let smoke = Smoke {
        id: ctx.registry.allocate_id(),
        position: player.position + player.orientation.rotate(Vec3::from(SMOKE_OFFSET)),
        life: 1.0,
        opacity: 1.0,
    };
    ctx.registry.push_smoke(smoke, &mut ctx.events);
}

/// Start a burst of fragments at `position`.
pub fn spawn_explosion(ctx: &mut FrameContext, position: Vec3) {
    ctx.events.push(SimEvent::Explosion { position });
    for _ in 0..EXPLOSION_PARTICLES {
        let velocity = Vec3::new(
            (ctx.rng.gen::<f32>() - 0.5) * EXPLOSION_HORIZONTAL_SPREAD,
            ctx.rng.gen::<f32>() * EXPLOSION_VERTICAL_SPREAD,
            (ctx.rng.gen::<f32>() - 0.5) * EXPLOSION_HORIZONTAL_SPREAD,
        );
        let particle = ExplosionParticle {
            id: ctx.registry.allocate_id(),
            position,
            velocity,
            life: 1.0,
            opacity: EXPLOSION_START_OPACITY,
            scale: 1.0,
            radius: EXPLOSION_MIN_RADIUS + ctx.rng.gen::<f32>() * EXPLOSION_RADIUS_SPREAD,
        };
        ctx.registry.push_explosion(particle, &mut ctx.events);
    }
}

/// Fade, lift and retire smoke puffs.
pub fn decay_smoke(ctx: &mut FrameContext) {
    for index in (0..ctx.registry.smoke.len()).rev() {
        let smoke = &mut ctx.registry.smoke[index];
        smoke.life -= SMOKE_LIFE_DECAY;
        smoke.opacity = smoke.life.max(0.0);
        smoke.position.y += SMOKE_RISE;
        if smoke.life <= 0.0 {
            ctx.registry.remove_smoke(index, &mut ctx.events);
        }
    }
}

/// Scatter, grow, fade and retire explosion fragments.
pub fn decay_explosions(ctx: &mut FrameContext) {
    for index in (0..ctx.registry.explosions.len()).rev() {
        let p = &mut ctx.registry.explosions[index];
        p.position += p.velocity * EXPLOSION_VELOCITY_DAMPING;
        p.scale *= EXPLOSION_SCALE_GROWTH;
        p.opacity *= EXPLOSION_OPACITY_DECAY;
        p.life -= EXPLOSION_LIFE_DECAY;
        if p.life <= 0.0 || p.opacity < EXPLOSION_VISIBILITY_FLOOR {
            ctx.registry.remove_explosion(index, &mut ctx.events);
        }
    }
}
