//! Projectile kinematics and world-edge cull.
//!
//! Player rounds fly along the attitude they were fired with; enemy rounds
//! keep their launch velocity. Neither re-targets.
//!
//! Post: every bullet has moved one step; bullets beyond `WORLD_RADIUS`
//! from the origin are removed on the frame they cross it.

use skyraid_core::constants::{PLAYER_BULLET_SPEED, WORLD_RADIUS};
use skyraid_core::enums::RemovalCause;
use skyraid_core::types::Vec3;

use crate::context::FrameContext;

/// Run the projectile stage.
pub fn run(ctx: &mut FrameContext) {
    for index in (0..ctx.registry.player_bullets.len()).rev() {
        let bullet = &mut ctx.registry.player_bullets[index];
        bullet.position += bullet.orientation.forward() * PLAYER_BULLET_SPEED;
        if beyond_world_edge(bullet.position) {
            ctx.registry
                .remove_player_bullet(index, RemovalCause::WorldEdge, &mut ctx.events);
        }
    }

    for index in (0..ctx.registry.enemy_bullets.len()).rev() {
        let bullet = &mut ctx.registry.enemy_bullets[index];
        bullet.position += bullet.velocity;
        if beyond_world_edge(bullet.position) {
            ctx.registry
                .remove_enemy_bullet(index, RemovalCause::WorldEdge, &mut ctx.events);
        }
    }
}

/// Strictly outside the world radius.
pub fn beyond_world_edge(position: Vec3) -> bool {
    position.length() > WORLD_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyraid_core::components::{EnemyBullet, PlayerBullet};
    use skyraid_core::types::Orientation;

    #[test]
    fn test_player_bullet_culled_on_crossing_frame_only() {
        let mut ctx = FrameContext::with_seed(0);
        let bullet = PlayerBullet {
            id: ctx.registry.allocate_id(),
            position: Vec3::new(0.0, 0.0, -1998.0),
            orientation: Orientation::default(),
        };
        ctx.registry.push_player_bullet(bullet, &mut ctx.events);

        run(&mut ctx);
        // -1999.5: still inside.
        assert_eq!(ctx.registry.player_bullets.len(), 1);

        run(&mut ctx);
        // -2001.0: gone.
        assert!(ctx.registry.player_bullets.is_empty());
    }

    #[test]
    fn test_bullet_exactly_on_edge_survives() {
        assert!(!beyond_world_edge(Vec3::new(0.0, 0.0, WORLD_RADIUS)));
        assert!(beyond_world_edge(Vec3::new(0.0, 0.0, WORLD_RADIUS + 0.01)));
    }

    #[test]
    fn test_enemy_bullet_keeps_velocity() {
        let mut ctx = FrameContext::with_seed(0);
        let velocity = Vec3::new(0.3, -0.2, 1.0);
        let bullet = EnemyBullet {
            id: ctx.registry.allocate_id(),
            position: Vec3::ZERO,
            velocity,
        };
        ctx.registry.push_enemy_bullet(bullet, &mut ctx.events);

        for _ in 0..10 {
            run(&mut ctx);
        }
        let bullet = ctx.registry.enemy_bullets[0];
        assert!((bullet.position - velocity * 10.0).length() < 1e-5);
        assert_eq!(bullet.velocity, velocity);
    }

    #[test]
    fn test_enemy_bullet_culled_at_world_edge() {
        let mut ctx = FrameContext::with_seed(0);
        let bullet = EnemyBullet {
            id: ctx.registry.allocate_id(),
            position: Vec3::new(1999.5, 0.0, 0.0),
            velocity: Vec3::new(1.2, 0.0, 0.0),
        };
        ctx.registry.push_enemy_bullet(bullet, &mut ctx.events);
        run(&mut ctx);
        assert!(ctx.registry.enemy_bullets.is_empty());
    }
}
