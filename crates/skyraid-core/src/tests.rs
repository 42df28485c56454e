#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, SimConfig};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::input::{InputState, KeyCode};
    use crate::state::FrameSnapshot;
    use crate::types::{yaw_towards, EntityId, Orientation, SimTime, Vec3};

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_game_phase_serde() {
        for v in [GamePhase::Idle, GamePhase::Active, GamePhase::GameOver] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_json_is_tagged() {
        let cmd = PlayerCommand::Key {
            key: KeyCode::Space,
            pressed: true,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"Key\""), "got {json}");

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartSession"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::StartSession));
    }

    #[test]
    fn test_event_serde() {
        let event = SimEvent::Despawned {
            id: EntityId(7),
            kind: EntityKind::Enemy,
            cause: RemovalCause::Shot,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let json = serde_json::to_string(&FrameSnapshot::default()).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
        assert!(json.contains("\"player\":null"));
    }

    // ---- Input ----

    #[test]
    fn test_arrows_and_wasd_map_to_same_flags() {
        let pairs = [
            (KeyCode::ArrowLeft, KeyCode::KeyA),
            (KeyCode::ArrowRight, KeyCode::KeyD),
            (KeyCode::ArrowUp, KeyCode::KeyW),
            (KeyCode::ArrowDown, KeyCode::KeyS),
        ];
        for (arrow, letter) in pairs {
            let mut a = InputState::default();
            let mut b = InputState::default();
            a.apply_key(arrow, true);
            b.apply_key(letter, true);
            assert_eq!(a, b);
            assert_ne!(a, InputState::default());
        }
    }

    #[test]
    fn test_key_up_clears_flag() {
        let mut input = InputState::default();
        input.apply_key(KeyCode::Space, true);
        input.apply_key(KeyCode::ArrowLeft, true);
        assert!(input.fire);
        assert!(input.left);

        input.apply_key(KeyCode::Space, false);
        input.apply_key(KeyCode::ArrowLeft, false);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut input = InputState::default();
        input.apply_key(KeyCode::Other, true);
        assert_eq!(input, InputState::default());
    }

    // ---- Orientation ----

    #[test]
    fn test_level_orientation_faces_negative_z() {
        assert!(approx(Orientation::default().forward(), Vec3::NEG_Z));
    }

    #[test]
    fn test_positive_yaw_turns_left() {
        let forward = Orientation::from_yaw(FRAC_PI_2).forward();
        assert!(approx(forward, Vec3::NEG_X), "got {forward:?}");
    }

    #[test]
    fn test_positive_pitch_climbs() {
        let forward = Orientation::new(0.3, 0.0, 0.0).forward();
        assert!(forward.y > 0.0);
        assert!((forward.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_pitch_climbs_after_turning() {
        // Pitch acts about the wing axis, whatever the heading.
        let forward = Orientation::new(0.3, FRAC_PI_2, 0.0).forward();
        assert!((forward.y - 0.3_f32.sin()).abs() < EPS);
        assert!(forward.x < 0.0);
    }

    #[test]
    fn test_roll_does_not_change_forward() {
        let level = Orientation::new(0.1, 0.4, 0.0).forward();
        let banked = Orientation::new(0.1, 0.4, 0.5).forward();
        assert!(approx(level, banked));
    }

    #[test]
    fn test_yaw_towards_points_forward_at_target() {
        let from = Vec3::new(10.0, 20.0, -40.0);
        let to = Vec3::new(-5.0, 1.0, 3.0);
        let forward = Orientation::from_yaw(yaw_towards(from, to)).forward();
        let expected = Vec3::new(to.x - from.x, 0.0, to.z - from.z).normalize();
        assert!(approx(forward, expected), "{forward:?} vs {expected:?}");
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(16.0);
        assert_eq!(time.frame, 2);
        assert!((time.elapsed_ms - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_never_runs_backwards() {
        let mut time = SimTime::default();
        time.advance_to(100.0);
        time.advance_to(50.0);
        assert_eq!(time.frame, 2);
        assert_eq!(time.elapsed_ms, 100.0);
    }

    // ---- Config ----

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 9, "enemy_count": 3 }"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.enemy_count, 3);
        assert_eq!(config.building_count, SimConfig::default().building_count);
        assert_eq!(config.frame_ms, SimConfig::default().frame_ms);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = SimConfig::from_json(r#"{ "frame_ms": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json(r#"{ "enemy_fire_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_config_sanitized_clamps_into_range() {
        let config = SimConfig {
            frame_ms: -5.0,
            enemy_fire_chance: 1.5,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.frame_ms, SimConfig::default().frame_ms);
        assert_eq!(config.enemy_fire_chance, 1.0);
        assert!(config.validate().is_ok());

        let config = SimConfig {
            frame_ms: f64::INFINITY,
            enemy_fire_chance: f64::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config, SimConfig::default());

        let config = SimConfig {
            enemy_fire_chance: -0.2,
            ..Default::default()
        };
        assert_eq!(config.sanitized().enemy_fire_chance, 0.0);
    }

    #[test]
    fn test_config_parse_error() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = SimConfig::load_from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
