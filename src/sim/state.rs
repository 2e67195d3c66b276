//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: the RNG is part of the
//! state, so two states built from the same seed and fed the same inputs stay
//! identical.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platforms::PlatformField;
use super::scoring::HeightTracker;
use crate::config::{ConfigError, WorldConfig};

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// The bouncing avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in screen space (y grows downward)
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick (negative = rising)
    pub velocity_y: f32,
    pub facing: Direction,
}

impl Player {
    /// Player at the spawn point, at rest
    pub fn spawn(config: &WorldConfig) -> Self {
        Self {
            pos: Vec2::new(config.spawn_x(), config.spawn_y()),
            velocity_y: 0.0,
            facing: Direction::Right,
        }
    }

    /// Y coordinate of the player's feet
    #[inline]
    pub fn bottom(&self, config: &WorldConfig) -> f32 {
        self.pos.y + config.player_size
    }
}

/// Events the simulation hands back to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The run just ended; emitted once, on the transition tick
    GameOver {
        final_score: u64,
        high_score: u64,
        ticks: u64,
    },
}

/// Read-only per-tick output for renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player_x: f32,
    pub player_y: f32,
    pub direction: Direction,
    pub platforms: Vec<Vec2>,
    pub score: u64,
    pub high_score: u64,
    pub is_game_over: bool,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// World constants this run was validated against
    pub config: WorldConfig,
    /// Seed of the current run
    pub seed: u64,
    /// Platform placement RNG
    pub rng: Pcg32,
    pub player: Player,
    pub platforms: PlatformField,
    /// Net upward progress this run
    pub score: u64,
    /// Best final score this session (carried across resets)
    pub high_score: u64,
    pub is_game_over: bool,
    /// Unscrolled height bookkeeping for scoring
    pub height: HeightTracker,
    /// Ticks applied since the last reset
    pub time_ticks: u64,
}

impl SimulationState {
    /// Validate `config` and build a fresh run
    ///
    /// `high_score` is the best score recorded by the host before this
    /// session; the engine only ever raises it.
    pub fn new(config: WorldConfig, seed: u64, high_score: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = PlatformField::generate(&config, &mut rng);
        let player = Player::spawn(&config);
        let height = HeightTracker::new(player.pos.y);

        log::info!(
            "New run: seed={}, platforms={}, high_score={}",
            seed,
            config.platform_count,
            high_score
        );

        Ok(Self {
            config,
            seed,
            rng,
            player,
            platforms,
            score: 0,
            high_score,
            is_game_over: false,
            height,
            time_ticks: 0,
        })
    }

    /// Start a new run, keeping the high score and the RNG stream
    pub fn reset(&mut self) {
        self.platforms = PlatformField::generate(&self.config, &mut self.rng);
        self.player = Player::spawn(&self.config);
        self.height = HeightTracker::new(self.player.pos.y);
        self.score = 0;
        self.is_game_over = false;
        self.time_ticks = 0;
        log::info!("Run reset (high_score={})", self.high_score);
    }

    /// Start a new run from a fresh seed
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.reset();
    }

    /// Copy out what a renderer needs for this frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player_x: self.player.pos.x,
            player_y: self.player.pos.y,
            direction: self.player.facing,
            platforms: self.platforms.iter().map(|p| p.pos).collect(),
            score: self.score,
            high_score: self.high_score,
            is_game_over: self.is_game_over,
        }
    }
}
