//! Platform pool and recycling
//!
//! The field holds a fixed number of platforms for the whole run. Scrolling
//! moves them down; one that drops off the bottom is moved back to the top
//! with a new random x instead of being replaced.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;

/// A platform the player can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner in screen space
    pub pos: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

/// Fixed-size set of platforms (order carries no meaning)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformField {
    platforms: Vec<Platform>,
}

impl PlatformField {
    /// Evenly spaced platforms from the top edge down, random x
    pub fn generate(config: &WorldConfig, rng: &mut impl Rng) -> Self {
        let gap = config.world_height / config.platform_count as f32;
        let platforms = (0..config.platform_count)
            .map(|i| Platform::new(random_x(config, &mut *rng), i as f32 * gap))
            .collect();
        Self { platforms }
    }

    /// Build a field from explicit platforms (scenario setup, tests)
    pub fn from_platforms(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    /// Shift every platform down by `diff`, recycling those past the bottom
    ///
    /// Returns how many platforms were recycled.
    pub fn scroll(&mut self, diff: f32, config: &WorldConfig, rng: &mut impl Rng) -> usize {
        let mut recycled = 0;
        for platform in &mut self.platforms {
            platform.pos.y += diff;
            if platform.pos.y > config.world_height {
                platform.pos = Vec2::new(random_x(config, &mut *rng), 0.0);
                recycled += 1;
                log::trace!("Recycled platform to x={:.1}", platform.pos.x);
            }
        }
        recycled
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Pairs with `len`; never true for a field built from a validated config
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

/// Uniform x in `[0, world_width - platform_width)`
fn random_x(config: &WorldConfig, rng: &mut impl Rng) -> f32 {
    rng.random_range(0.0..config.platform_x_range())
}
