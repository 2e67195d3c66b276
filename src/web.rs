//! Browser bindings
//!
//! A renderer on the JS side owns the timer and the input listeners. It calls
//! [`WebGame::tick`] once per `tick_rate_ms` with the two intents, reads the
//! frame back as JSON, and stores the high score itself when a run ends.

use wasm_bindgen::prelude::*;

use crate::config::WorldConfig;
use crate::sim::{GameEvent, SimulationState, TickInput, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Sky Hop starting...");
}

/// One running game instance
#[wasm_bindgen]
pub struct WebGame {
    state: SimulationState,
    last_event: Option<GameEvent>,
}

#[wasm_bindgen]
impl WebGame {
    /// `config_json` may be omitted to use the default world
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64, high_score: f64, config_json: Option<String>) -> Result<WebGame, JsValue> {
        let config = match config_json {
            Some(json) => WorldConfig::from_json(&json),
            None => Ok(WorldConfig::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let state = SimulationState::new(config, seed as u64, high_score.max(0.0) as u64)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", state.seed);

        Ok(Self {
            state,
            last_event: None,
        })
    }

    /// Advance one tick; returns true on the tick the run ends
    pub fn tick(&mut self, left: bool, right: bool) -> bool {
        let event = tick(&mut self.state, &TickInput::new(left, right));
        let ended = event.is_some();
        if ended {
            self.last_event = event;
        }
        ended
    }

    /// Current frame as JSON (see `FrameSnapshot`)
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Final score of the last finished run, if any
    pub fn final_score(&self) -> Option<f64> {
        self.last_event.map(|event| match event {
            GameEvent::GameOver { final_score, .. } => final_score as f64,
        })
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    pub fn high_score(&self) -> f64 {
        self.state.high_score as f64
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn tick_rate_ms(&self) -> u32 {
        self.state.config.tick_rate_ms
    }

    pub fn restart(&mut self, seed: f64) {
        self.state.reset_with_seed(seed as u64);
        self.last_event = None;
        log::info!("Game restarted with seed: {}", self.state.seed);
    }
}
