//! Height-based scoring
//!
//! Score is net upward progress in whole pixels. The tracker follows the
//! player's unscrolled height (`world_y`, smaller = higher) and pays out only
//! when a new best height is beaten by at least one pixel, so bouncing in
//! place or sub-pixel jitter earns nothing.

use serde::{Deserialize, Serialize};

/// Smallest step (pixels) that counts as progress
pub const MIN_SCORING_STEP: f32 = 1.0;

/// Unscrolled height bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightTracker {
    /// Player height ignoring scroll compensation
    pub world_y: f32,
    /// Best (lowest) `world_y` paid out so far; `None` until the first tick
    pub max_height_reached: Option<f32>,
}

impl HeightTracker {
    pub fn new(world_y: f32) -> Self {
        Self {
            world_y,
            max_height_reached: None,
        }
    }

    /// Apply one tick of vertical displacement
    #[inline]
    pub fn advance(&mut self, velocity_y: f32) {
        self.world_y += velocity_y;
    }

    /// Points earned at the current height
    pub fn observe(&mut self) -> u64 {
        let Some(best) = self.max_height_reached else {
            self.max_height_reached = Some(self.world_y);
            return 0;
        };

        if self.world_y >= best {
            return 0;
        }
        let diff = best - self.world_y;
        if diff < MIN_SCORING_STEP {
            return 0;
        }
        self.max_height_reached = Some(self.world_y);
        diff.floor() as u64
    }
}
