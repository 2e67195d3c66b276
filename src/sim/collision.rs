//! Player/platform collision
//!
//! Landing is an axis-aligned test on the post-step position: the player's
//! feet must sit inside the platform's vertical band while the boxes overlap
//! horizontally. There is no sweep, so a fast enough fall can skip a thin
//! platform in a single tick.

use glam::Vec2;

use super::platforms::Platform;
use crate::config::WorldConfig;

/// Does a player at `player_pos` moving at `velocity_y` land on `platform`?
///
/// Only a falling player (`velocity_y > 0`) can land; rising through a
/// platform from below never counts.
pub fn is_colliding(
    player_pos: Vec2,
    velocity_y: f32,
    platform: &Platform,
    config: &WorldConfig,
) -> bool {
    let feet = player_pos.y + config.player_size;
    let in_band = feet >= platform.pos.y && feet <= platform.pos.y + config.platform_height;
    let overlaps_x = player_pos.x + config.player_size > platform.pos.x
        && player_pos.x < platform.pos.x + config.platform_width;

    in_band && overlaps_x && velocity_y > 0.0
}

/// Index of the platform the player lands on, if any
///
/// When several qualify the last one in iteration order wins.
pub fn landing_platform<'a>(
    player_pos: Vec2,
    velocity_y: f32,
    platforms: impl IntoIterator<Item = &'a Platform>,
    config: &WorldConfig,
) -> Option<usize> {
    platforms
        .into_iter()
        .enumerate()
        .filter(|(_, p)| is_colliding(player_pos, velocity_y, p, config))
        .map(|(i, _)| i)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Platform {
        Platform::new(100.0, 400.0)
    }

    #[test]
    fn test_lands_when_feet_in_band() {
        let config = WorldConfig::default();
        // Feet at 405, inside [400, 415]
        assert!(is_colliding(Vec2::new(120.0, 365.0), 3.0, &platform(), &config));
    }

    #[test]
    fn test_band_edges_inclusive() {
        let config = WorldConfig::default();
        assert!(is_colliding(Vec2::new(120.0, 360.0), 1.0, &platform(), &config));
        assert!(is_colliding(Vec2::new(120.0, 375.0), 1.0, &platform(), &config));
        assert!(!is_colliding(Vec2::new(120.0, 375.5), 1.0, &platform(), &config));
        assert!(!is_colliding(Vec2::new(120.0, 359.5), 1.0, &platform(), &config));
    }

    #[test]
    fn test_rising_player_passes_through() {
        let config = WorldConfig::default();
        assert!(!is_colliding(Vec2::new(120.0, 365.0), -5.0, &platform(), &config));
        assert!(!is_colliding(Vec2::new(120.0, 365.0), 0.0, &platform(), &config));
    }

    #[test]
    fn test_horizontal_overlap_is_strict() {
        let config = WorldConfig::default();
        // Right edge of player touches left edge of platform: no overlap
        assert!(!is_colliding(Vec2::new(60.0, 365.0), 3.0, &platform(), &config));
        // Left edge of player touches right edge of platform (100 + 85)
        assert!(!is_colliding(Vec2::new(185.0, 365.0), 3.0, &platform(), &config));
        assert!(is_colliding(Vec2::new(184.0, 365.0), 3.0, &platform(), &config));
    }

    #[test]
    fn test_last_matching_platform_wins() {
        let config = WorldConfig::default();
        let platforms = [
            Platform::new(100.0, 400.0),
            Platform::new(0.0, 0.0),
            Platform::new(110.0, 402.0),
        ];
        let hit = landing_platform(Vec2::new(120.0, 365.0), 3.0, &platforms, &config);
        assert_eq!(hit, Some(2));
        assert_eq!(landing_platform(Vec2::new(120.0, 100.0), 3.0, &platforms, &config), None);
    }
}
