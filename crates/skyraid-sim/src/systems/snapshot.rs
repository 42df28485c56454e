//! Snapshot system: reads the frame context and builds a complete FrameSnapshot.
//!
//! This system is read-only — it never modifies the registry.

use skyraid_core::constants::SMOKE_RADIUS;
use skyraid_core::enums::GamePhase;
use skyraid_core::events::SimEvent;
use skyraid_core::state::*;
use skyraid_core::types::Vec3;

use crate::context::FrameContext;

/// Build a FrameSnapshot from the current context.
pub fn build_snapshot(ctx: &FrameContext, phase: GamePhase, events: Vec<SimEvent>) -> FrameSnapshot {
    let registry = &ctx.registry;

    FrameSnapshot {
        time: ctx.time,
        phase,
        player: registry.player.map(|p| BodyView {
            id: p.id,
            position: p.position,
            orientation: p.orientation,
        }),
        camera: CameraView {
            position: ctx.camera.position,
            look_at: ctx.camera.look_at,
        },
        enemies: registry
            .enemies
            .iter()
            .map(|e| BodyView {
                id: e.id,
                position: e.position,
                orientation: e.orientation(),
            })
            .collect(),
        player_bullets: registry
            .player_bullets
            .iter()
            .map(|b| BodyView {
                id: b.id,
                position: b.position,
                orientation: b.orientation,
            })
            .collect(),
        enemy_bullets: registry
            .enemy_bullets
            .iter()
            .map(|b| BodyView {
                id: b.id,
                position: b.position,
                orientation: Default::default(),
            })
            .collect(),
        smoke: registry
            .smoke
            .iter()
            .map(|s| ParticleView {
                id: s.id,
                position: s.position,
                opacity: s.opacity,
                radius: SMOKE_RADIUS,
            })
            .collect(),
        explosions: registry
            .explosions
            .iter()
            .map(|p| ParticleView {
                id: p.id,
                position: p.position,
                opacity: p.opacity,
                radius: p.radius * p.scale,
            })
            .collect(),
        buildings: registry
            .buildings
            .iter()
            .map(|b| BuildingView {
                id: b.id,
                position: b.position,
                size: Vec3::new(b.width, b.height, b.depth),
            })
            .collect(),
        stats: StatsView {
            enemies_destroyed: ctx.stats.enemies_destroyed,
            enemies_remaining: registry.enemies.len() as u32,
            shots_fired: ctx.stats.shots_fired,
            enemy_shots_fired: ctx.stats.enemy_shots_fired,
        },
        events,
    }
}
