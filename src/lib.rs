//! Sky Hop - A vertically scrolling platform-jumping game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scrolling, scoring)
//! - `config`: Validated world constants
//! - `highscores`: Leaderboard fed by game-over events
//! - `web`: wasm-bindgen surface for browser renderers

pub mod config;
pub mod highscores;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, WorldConfig};
pub use highscores::HighScores;

/// Default world constants (the values the original web game shipped with)
pub mod consts {
    /// Playfield width in pixels
    pub const WORLD_WIDTH: f32 = 400.0;
    /// Playfield height in pixels
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player box side length
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Player spawns this far above the bottom edge (feet to floor)
    pub const SPAWN_OFFSET: f32 = 200.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 85.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    pub const PLATFORM_COUNT: usize = 5;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.4;
    /// Vertical velocity after a bounce (negative = up)
    pub const JUMP_VELOCITY: f32 = -10.0;
    /// Horizontal speed per tick
    pub const MOVE_SPEED: f32 = 5.0;

    /// Nominal tick length (50 Hz)
    pub const TICK_RATE_MS: u32 = 20;
}

/// Wrap a horizontal position around the playfield edges
///
/// A player fully past the left edge reappears at the right edge and vice
/// versa. Positions partially off-screen are left alone.
#[inline]
pub fn wrap_x(x: f32, world_width: f32, player_size: f32) -> f32 {
    if x + player_size < 0.0 {
        world_width
    } else if x > world_width {
        -player_size
    } else {
        x
    }
}

/// Signed shortest horizontal offset from `from` to `to` on a wrapping playfield
///
/// The wrap period is `world_width + player_size`, matching [`wrap_x`].
#[inline]
pub fn wrapped_delta(from: f32, to: f32, world_width: f32, player_size: f32) -> f32 {
    let period = world_width + player_size;
    let mut delta = (to - from).rem_euclid(period);
    if delta > period / 2.0 {
        delta -= period;
    }
    delta
}
