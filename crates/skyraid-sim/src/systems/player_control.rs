//! Player flight control: attitude from input, constant-speed flight, gun.
//!
//! Pre: input reflects the keys held this frame.
//! Post: the player has moved one step along its nose, the camera has
//! followed, and at most one bullet was fired. No-op without a player.

use skyraid_core::components::{Player, PlayerBullet};
use skyraid_core::constants::*;
use skyraid_core::events::SimEvent;
use skyraid_core::input::InputState;
use skyraid_core::types::Orientation;

use crate::context::FrameContext;

/// Run the player control stage.
pub fn run(ctx: &mut FrameContext, input: &InputState) {
    let Some(player) = ctx.registry.player.as_mut() else {
        return;
    };

    steer(&mut player.orientation, input);
    player.position += player.orientation.forward() * PLAYER_SPEED;

    let player = *player;
    ctx.camera.follow(&player);

    let now = ctx.now_ms();
    if input.fire && now - ctx.timers.last_player_fire_ms > PLAYER_FIRE_COOLDOWN_MS {
        fire(ctx, &player);
        ctx.timers.last_player_fire_ms = now;
    }
}

/// Apply one frame of stick input to an attitude.
pub fn steer(orientation: &mut Orientation, input: &InputState) {
    if input.left {
        orientation.yaw += PLAYER_YAW_RATE;
        orientation.roll = (orientation.roll + PLAYER_ROLL_RATE).min(PLAYER_ROLL_LIMIT);
    } else if input.right {
        orientation.yaw -= PLAYER_YAW_RATE;
        orientation.roll = (orientation.roll - PLAYER_ROLL_RATE).max(-PLAYER_ROLL_LIMIT);
    } else {
        orientation.roll *= PLAYER_ROLL_DAMPING;
    }

    if input.up {
        orientation.pitch += PLAYER_PITCH_RATE;
    }
    if input.down {
        orientation.pitch -= PLAYER_PITCH_RATE;
    }
    orientation.pitch = orientation
        .pitch
        .clamp(-PLAYER_PITCH_LIMIT, PLAYER_PITCH_LIMIT);
}

/// Spawn a round at the player's position, flying along its nose.
fn fire(ctx: &mut FrameContext, player: &Player) {
    let bullet = PlayerBullet {
        id: ctx.registry.allocate_id(),
        position: player.position,
        orientation: player.orientation,
    };
    ctx.registry.push_player_bullet(bullet, &mut ctx.events);
    ctx.events.push(SimEvent::PlayerFired);
    ctx.stats.shots_fired += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyraid_core::types::{EntityId, Vec3};

    fn held(left: bool, right: bool, up: bool, down: bool) -> InputState {
        InputState {
            left,
            right,
            up,
            down,
            fire: false,
        }
    }

    fn context_with_player() -> FrameContext {
        let mut ctx = FrameContext::with_seed(1);
        let player = Player {
            id: EntityId(0),
            position: Vec3::new(0.0, PLAYER_SPAWN_ALTITUDE, 0.0),
            orientation: Orientation::default(),
        };
        ctx.registry.set_player(player, &mut ctx.events);
        ctx
    }

    #[test]
    fn test_roll_limited_while_turning() {
        let mut o = Orientation::default();
        for _ in 0..100 {
            steer(&mut o, &held(true, false, false, false));
            assert!(o.roll <= PLAYER_ROLL_LIMIT);
        }
        assert!((o.roll - PLAYER_ROLL_LIMIT).abs() < 1e-6);
        assert!((o.yaw - 100.0 * PLAYER_YAW_RATE).abs() < 1e-4);

        for _ in 0..100 {
            steer(&mut o, &held(false, true, false, false));
            assert!(o.roll >= -PLAYER_ROLL_LIMIT);
        }
        assert!((o.roll + PLAYER_ROLL_LIMIT).abs() < 1e-6);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut o = Orientation::default();
        steer(&mut o, &held(true, true, false, false));
        assert!(o.yaw > 0.0);
    }

    #[test]
    fn test_roll_decays_monotonically_without_turn_input() {
        let mut o = Orientation::new(0.0, 0.0, -0.45);
        let mut previous = o.roll.abs();
        for _ in 0..200 {
            steer(&mut o, &held(false, false, true, false));
            assert!(o.roll.abs() <= previous);
            previous = o.roll.abs();
        }
        assert!(previous < 1e-6);
    }

    #[test]
    fn test_pitch_clamped_under_sustained_input() {
        let mut o = Orientation::default();
        for _ in 0..500 {
            steer(&mut o, &held(false, false, true, false));
            assert!(o.pitch.abs() <= PLAYER_PITCH_LIMIT);
        }
        assert_eq!(o.pitch, PLAYER_PITCH_LIMIT);
        for _ in 0..500 {
            steer(&mut o, &held(false, false, false, true));
            assert!(o.pitch.abs() <= PLAYER_PITCH_LIMIT);
        }
        assert_eq!(o.pitch, -PLAYER_PITCH_LIMIT);
    }

    #[test]
    fn test_up_and_down_cancel() {
        let mut o = Orientation::new(0.1, 0.0, 0.0);
        steer(&mut o, &held(false, false, true, true));
        assert!((o.pitch - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_player_flies_forward_at_constant_speed() {
        let mut ctx = context_with_player();
        run(&mut ctx, &InputState::default());
        let player = ctx.registry.player.unwrap();
        assert!((player.position - Vec3::new(0.0, 1.0, -PLAYER_SPEED)).length() < 1e-6);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut ctx = context_with_player();
        let trigger = InputState {
            fire: true,
            ..Default::default()
        };

        ctx.time.advance_to(150.0);
        run(&mut ctx, &trigger);
        assert!(ctx.registry.player_bullets.is_empty(), "too soon after session start");

        ctx.time.advance_to(201.0);
        run(&mut ctx, &trigger);
        assert_eq!(ctx.registry.player_bullets.len(), 1);

        ctx.time.advance_to(400.0);
        run(&mut ctx, &trigger);
        assert_eq!(ctx.registry.player_bullets.len(), 1);

        ctx.time.advance_to(402.0);
        run(&mut ctx, &trigger);
        assert_eq!(ctx.registry.player_bullets.len(), 2);
        assert_eq!(ctx.stats.shots_fired, 2);
    }

    #[test]
    fn test_bullet_inherits_player_attitude() {
        let mut ctx = context_with_player();
        ctx.time.advance_to(1000.0);
        let input = InputState {
            left: true,
            fire: true,
            ..Default::default()
        };
        run(&mut ctx, &input);
        let player = ctx.registry.player.unwrap();
        let bullet = ctx.registry.player_bullets[0];
        assert_eq!(bullet.position, player.position);
        assert_eq!(bullet.orientation, player.orientation);
    }

    #[test]
    fn test_no_player_is_noop() {
        let mut ctx = FrameContext::with_seed(1);
        ctx.time.advance_to(1000.0);
        let trigger = InputState {
            fire: true,
            ..Default::default()
        };
        run(&mut ctx, &trigger);
        assert!(ctx.registry.player_bullets.is_empty());
        assert!(ctx.events.is_empty());
    }
}
