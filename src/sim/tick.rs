//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one tick. The phases run in a fixed
//! order and each one sees the results of the previous:
//! horizontal move, vertical integration, landing, scroll, scoring, game over.

use super::collision::landing_platform;
use super::state::{Direction, GameEvent, SimulationState};
use crate::wrap_x;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }
}

/// Advance the state by one tick in place
///
/// Returns `Some(GameEvent::GameOver)` on the tick the run ends. Once the run
/// is over further calls do nothing until the state is reset.
pub fn tick(state: &mut SimulationState, input: &TickInput) -> Option<GameEvent> {
    if state.is_game_over {
        return None;
    }
    let config = state.config;
    state.time_ticks += 1;

    // Horizontal: right is applied after left, so holding both nets zero
    // displacement but leaves the player facing right
    let player = &mut state.player;
    let mut x = player.pos.x;
    if input.left {
        x -= config.move_speed;
        player.facing = Direction::Left;
    }
    if input.right {
        x += config.move_speed;
        player.facing = Direction::Right;
    }
    player.pos.x = wrap_x(x, config.world_width, config.player_size);

    // Vertical: position uses last tick's velocity, gravity lands afterwards
    let step_velocity = player.velocity_y;
    let mut new_y = player.pos.y + step_velocity;
    state.height.advance(step_velocity);
    player.velocity_y += config.gravity;

    // Landing is judged on the velocity that carried the player this tick
    let landing_pos = glam::Vec2::new(player.pos.x, new_y);
    let landing = landing_platform(landing_pos, step_velocity, state.platforms.iter(), &config);
    if let Some(index) = landing {
        player.velocity_y = config.jump_velocity;
        log::debug!("Bounce on platform {} at tick {}", index, state.time_ticks);
    }

    // Keep the player pinned at mid-screen while climbing; the world moves instead
    let scroll_line = config.scroll_line();
    if new_y < scroll_line {
        state
            .platforms
            .scroll(scroll_line - new_y, &config, &mut state.rng);
        new_y = scroll_line;
    }

    state.score += state.height.observe();

    if new_y > config.world_height {
        // Freeze the last on-screen position
        state.is_game_over = true;
        state.high_score = state.high_score.max(state.score);
        log::info!(
            "Game over after {} ticks: score={}, high_score={}",
            state.time_ticks,
            state.score,
            state.high_score
        );
        return Some(GameEvent::GameOver {
            final_score: state.score,
            high_score: state.high_score,
            ticks: state.time_ticks,
        });
    }

    state.player.pos.y = new_y;
    None
}

/// Pure form of [`tick`]: returns the next state and leaves `state` untouched
pub fn advance(state: &SimulationState, input: &TickInput) -> (SimulationState, Option<GameEvent>) {
    let mut next = state.clone();
    let event = tick(&mut next, input);
    (next, event)
}
