//! Sky Hop headless driver
//!
//! Runs autopilot games on the native target and logs the outcome of each
//! run. Browser builds drive the core through `sky_hop::web` instead.
//!
//! Usage: `sky-hop [games] [seed]`
//! - `SKY_HOP_CONFIG`: path to a JSON world config (missing fields default)
//! - `SKY_HOP_REALTIME`: pace ticks at the configured tick rate

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Instant;

    use sky_hop::sim::{GameEvent, SimulationState, autopilot, tick};
    use sky_hop::{ConfigError, HighScores, WorldConfig};

    /// Give up on a run that never ends (5 minutes at 50 Hz)
    const MAX_TICKS_PER_GAME: u64 = 15_000;

    fn load_config() -> Result<WorldConfig, ConfigError> {
        match std::env::var("SKY_HOP_CONFIG") {
            Ok(path) => WorldConfig::load(path),
            Err(_) => Ok(WorldConfig::default()),
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        let mut args = std::env::args().skip(1);
        let games: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3);
        let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0x5EED);
        let realtime = std::env::var_os("SKY_HOP_REALTIME").is_some();

        let config = load_config()?;
        let interval = config.tick_interval();
        let mut leaderboard = HighScores::new();
        let mut state = SimulationState::new(config, seed, leaderboard.best())?;

        for game in 0..games {
            if game > 0 {
                state.reset_with_seed(seed.wrapping_add(u64::from(game)));
            }
            let run_seed = state.seed;

            let mut outcome = None;
            while outcome.is_none() && state.time_ticks < MAX_TICKS_PER_GAME {
                let started = Instant::now();
                let input = autopilot::steer(&state);
                outcome = tick(&mut state, &input);

                if realtime {
                    if let Some(rest) = interval.checked_sub(started.elapsed()) {
                        std::thread::sleep(rest);
                    }
                }
            }

            match outcome {
                Some(event @ GameEvent::GameOver { final_score, ticks, .. }) => {
                    log::info!(
                        "Game {} (seed {}): score {} in {} ticks",
                        game + 1,
                        run_seed,
                        final_score,
                        ticks
                    );
                    leaderboard.record(&event, run_seed);
                }
                None => log::warn!(
                    "Game {} (seed {}) still running after {} ticks, score {}",
                    game + 1,
                    run_seed,
                    state.time_ticks,
                    state.score
                ),
            }
        }

        for (rank, entry) in leaderboard.entries.iter().enumerate() {
            log::info!(
                "#{}: {} (seed {}, {} ticks)",
                rank + 1,
                entry.score,
                entry.seed,
                entry.ticks
            );
        }
        match leaderboard.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize leaderboard: {}", e),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sky Hop (headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web entry point is `sky_hop::web::start`
}
