//! Headless Skyraid host.
//!
//! Usage: `skyraid-app [config.json] [seconds]`
//!
//! Starts a session and flies a scripted demo pilot through it, logging
//! the outcome. Set `RUST_LOG=debug` for per-kill detail.

use std::time::{Duration, Instant};

use skyraid_app::game_loop;
use skyraid_app::state::{AppState, GameLoopCommand};
use skyraid_core::commands::PlayerCommand;
use skyraid_core::config::SimConfig;
use skyraid_core::enums::GamePhase;
use skyraid_core::input::InputState;

const DEFAULT_RUN_SECONDS: u64 = 20;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load_from_file(&path).unwrap_or_else(|e| {
            log::warn!("using default config, could not load {path}: {e}");
            SimConfig::default()
        }),
        None => SimConfig::default(),
    };
    let run_for = args
        .next()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(DEFAULT_RUN_SECONDS));

    let state = AppState::new();
    let (tx, handle) = match game_loop::spawn_game_loop(config, state.latest_snapshot.clone()) {
        Ok(spawned) => spawned,
        Err(e) => {
            log::error!("failed to spawn game loop: {e}");
            std::process::exit(1);
        }
    };
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    state.send_player_command(PlayerCommand::StartSession);

    let started = Instant::now();
    let mut sessions = 1;
    while started.elapsed() < run_for {
        std::thread::sleep(Duration::from_millis(250));
        let Some(snapshot) = state.latest() else {
            continue;
        };
        if snapshot.phase == GamePhase::GameOver {
            log::info!(
                "session {sessions} over: {} kills, {} shots",
                snapshot.stats.enemies_destroyed,
                snapshot.stats.shots_fired
            );
            sessions += 1;
            state.send_player_command(PlayerCommand::StartSession);
            continue;
        }
        let input = demo_pilot(started.elapsed());
        state.send_player_command(PlayerCommand::SetInput { input });
    }

    state.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        log::error!("game loop thread panicked");
    }

    if let Some(snapshot) = state.latest() {
        log::info!(
            "finished after {sessions} session(s): phase {:?}, {} kills, {} enemies left, \
             {} shots fired, {} enemy shots",
            snapshot.phase,
            snapshot.stats.enemies_destroyed,
            snapshot.stats.enemies_remaining,
            snapshot.stats.shots_fired,
            snapshot.stats.enemy_shots_fired
        );
        match serde_json::to_string_pretty(&snapshot.stats) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("failed to encode stats: {e}"),
        }
    }
}

/// Holds the trigger and weaves: two seconds left, one level, two right,
/// one level. A brief climb opens the cycle and a matching dive levels it.
fn demo_pilot(elapsed: Duration) -> InputState {
    let ms = elapsed.as_millis() % 6000;
    InputState {
        left: ms < 2000,
        right: (3000..5000).contains(&ms),
        up: ms < 250,
        down: (3000..3250).contains(&ms),
        fire: true,
    }
}
