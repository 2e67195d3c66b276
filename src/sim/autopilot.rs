//! Idle/demo mode steering
//!
//! Produces intents from a state snapshot, the same way a player would: pick
//! the highest platform the current jump can still land on and drift toward
//! it along the shorter way around the wrapping playfield. The engine never
//! calls this; drivers feed its output back through [`tick`](super::tick).

use super::platforms::Platform;
use super::state::SimulationState;
use super::tick::TickInput;
use crate::wrapped_delta;

/// Platform the autopilot is aiming for, if any
pub fn target_platform(state: &SimulationState) -> Option<&Platform> {
    let config = &state.config;
    let feet = state.player.bottom(config);
    let velocity = state.player.velocity_y;

    // Height still to gain before the apex of the current jump
    let rise = if velocity < 0.0 {
        velocity * velocity / (2.0 * config.gravity)
    } else {
        0.0
    };
    let reachable_from = feet - rise;

    let reachable = state
        .platforms
        .iter()
        .filter(|p| p.pos.y >= reachable_from)
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    // Nothing reachable: head for the lowest platform and hope
    reachable.or_else(|| {
        state
            .platforms
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    })
}

/// Choose this tick's intents
pub fn steer(state: &SimulationState) -> TickInput {
    let Some(target) = target_platform(state) else {
        return TickInput::default();
    };
    let config = &state.config;

    let target_x = target.pos.x + config.platform_width / 2.0 - config.player_size / 2.0;
    let delta = wrapped_delta(
        state.player.pos.x,
        target_x,
        config.world_width,
        config.player_size,
    );

    // Dead zone of one step avoids oscillating around the target
    if delta > config.move_speed {
        TickInput::new(false, true)
    } else if delta < -config.move_speed {
        TickInput::new(true, false)
    } else {
        TickInput::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::sim::platforms::PlatformField;
    use crate::sim::tick;

    fn scenario(platforms: Vec<Platform>) -> SimulationState {
        let mut state = SimulationState::new(WorldConfig::default(), 5, 0).unwrap();
        state.platforms = PlatformField::from_platforms(platforms);
        state
    }

    #[test]
    fn test_steers_toward_platform_below() {
        // Player at x=180, feet at 400; platform centered at x=300
        let state = scenario(vec![Platform::new(257.5, 450.0)]);
        assert_eq!(steer(&state), TickInput::new(false, true));

        let state = scenario(vec![Platform::new(20.0, 450.0)]);
        assert_eq!(steer(&state), TickInput::new(true, false));
    }

    #[test]
    fn test_idle_when_lined_up() {
        let state = scenario(vec![Platform::new(157.5, 450.0)]);
        assert_eq!(steer(&state), TickInput::default());
    }

    #[test]
    fn test_takes_short_way_around_edge() {
        let mut state = scenario(vec![Platform::new(310.0, 450.0)]);
        state.player.pos.x = 0.0;
        // Target x = 332.5; going left through the edge is shorter
        assert_eq!(steer(&state), TickInput::new(true, false));
    }

    #[test]
    fn test_prefers_highest_reachable_while_rising() {
        let mut state = scenario(vec![
            Platform::new(0.0, 450.0),
            Platform::new(300.0, 300.0),
            Platform::new(150.0, 100.0),
        ]);
        // v = -10 with g = 0.4 climbs 125 px more: feet reach 275
        state.player.velocity_y = -10.0;
        let target = target_platform(&state).unwrap();
        assert_eq!(target.pos.y, 300.0);
    }

    #[test]
    fn test_autopilot_keeps_climbing() {
        // One platform right under the spawn point, one further up
        let mut state = scenario(vec![Platform::new(157.5, 480.0), Platform::new(40.0, 200.0)]);
        for _ in 0..500 {
            let input = steer(&state);
            if tick(&mut state, &input).is_some() {
                break;
            }
        }
        assert!(state.score > 0);
    }
}
