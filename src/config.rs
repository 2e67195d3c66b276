//! World configuration
//!
//! The numeric contract between the simulation and its host: world size,
//! player and platform geometry, physics constants and tick cadence.
//! Validated once up front; a bad config never reaches the simulation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a [`WorldConfig`] is refused
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("platform_count must be at least 1")]
    NoPlatforms,
    #[error("platform_width {platform_width} must be smaller than world_width {world_width}")]
    PlatformTooWide { platform_width: f32, world_width: f32 },
    #[error("jump_velocity must be negative (upward), got {0}")]
    JumpNotUpward(f32),
    #[error("move_speed must not be negative, got {0}")]
    NegativeMoveSpeed(f32),
    #[error("tick_rate_ms must be at least 1")]
    ZeroTickRate,
    #[error("spawn height {spawn_y} lies outside the world (height {world_height})")]
    SpawnOutsideWorld { spawn_y: f32, world_height: f32 },
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tunable world constants
///
/// Deserializing goes through [`WorldConfig::validate`], so a config loaded
/// on its own or inside a saved state is always checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWorldConfig")]
pub struct WorldConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Side length of the (square) player box
    pub player_size: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_count: usize,
    /// Added to vertical velocity every tick (positive = down)
    pub gravity: f32,
    /// Velocity set on bounce (negative = up)
    pub jump_velocity: f32,
    /// Horizontal displacement per tick while an intent is held
    pub move_speed: f32,
    /// Nominal tick length in milliseconds
    pub tick_rate_ms: u32,
    /// Distance between the player's feet and the bottom edge at spawn
    pub spawn_offset: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            player_size: PLAYER_SIZE,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_count: PLATFORM_COUNT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            tick_rate_ms: TICK_RATE_MS,
            spawn_offset: SPAWN_OFFSET,
        }
    }
}

/// Unchecked wire form; missing fields take defaults
#[derive(Deserialize)]
#[serde(default)]
struct RawWorldConfig {
    world_width: f32,
    world_height: f32,
    player_size: f32,
    platform_width: f32,
    platform_height: f32,
    platform_count: usize,
    gravity: f32,
    jump_velocity: f32,
    move_speed: f32,
    tick_rate_ms: u32,
    spawn_offset: f32,
}

impl Default for RawWorldConfig {
    fn default() -> Self {
        let d = WorldConfig::default();
        Self {
            world_width: d.world_width,
            world_height: d.world_height,
            player_size: d.player_size,
            platform_width: d.platform_width,
            platform_height: d.platform_height,
            platform_count: d.platform_count,
            gravity: d.gravity,
            jump_velocity: d.jump_velocity,
            move_speed: d.move_speed,
            tick_rate_ms: d.tick_rate_ms,
            spawn_offset: d.spawn_offset,
        }
    }
}

impl TryFrom<RawWorldConfig> for WorldConfig {
    type Error = ConfigError;

    fn try_from(raw: RawWorldConfig) -> Result<Self, Self::Error> {
        let config = Self {
            world_width: raw.world_width,
            world_height: raw.world_height,
            player_size: raw.player_size,
            platform_width: raw.platform_width,
            platform_height: raw.platform_height,
            platform_count: raw.platform_count,
            gravity: raw.gravity,
            jump_velocity: raw.jump_velocity,
            move_speed: raw.move_speed,
            tick_rate_ms: raw.tick_rate_ms,
            spawn_offset: raw.spawn_offset,
        };
        config.validate()?;
        Ok(config)
    }
}

impl WorldConfig {
    /// Check every constraint the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reals = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_size", self.player_size),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("move_speed", self.move_speed),
            ("spawn_offset", self.spawn_offset),
        ];
        for (field, value) in reals {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_size", self.player_size),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("gravity", self.gravity),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.platform_count == 0 {
            return Err(ConfigError::NoPlatforms);
        }
        // Recycled x is drawn from [0, world_width - platform_width), which must be non-empty
        if self.platform_width >= self.world_width {
            return Err(ConfigError::PlatformTooWide {
                platform_width: self.platform_width,
                world_width: self.world_width,
            });
        }
        if self.jump_velocity >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_velocity));
        }
        if self.move_speed < 0.0 {
            return Err(ConfigError::NegativeMoveSpeed(self.move_speed));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let spawn_y = self.spawn_y();
        if spawn_y < 0.0 || spawn_y > self.world_height {
            return Err(ConfigError::SpawnOutsideWorld {
                spawn_y,
                world_height: self.world_height,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawWorldConfig = serde_json::from_str(json)?;
        let config = Self::try_from(raw)?;
        log::debug!("Loaded world config: {:?}", config);
        Ok(config)
    }

    /// Read a JSON config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("Reading world config from {}", path.display());
        Self::from_json(&json)
    }

    /// Nominal duration of one tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_rate_ms))
    }

    /// Vertical line the player is pinned to while ascending
    #[inline]
    pub fn scroll_line(&self) -> f32 {
        self.world_height / 2.0
    }

    /// Upper bound (exclusive) for a platform's x coordinate
    #[inline]
    pub fn platform_x_range(&self) -> f32 {
        self.world_width - self.platform_width
    }

    /// Horizontal spawn position (player centered)
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.world_width / 2.0 - self.player_size / 2.0
    }

    /// Vertical spawn position (top edge of the player box)
    #[inline]
    pub fn spawn_y(&self) -> f32 {
        self.world_height - self.player_size - self.spawn_offset
    }
}
