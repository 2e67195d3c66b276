//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per call, no wall-clock reads
//! - Seeded RNG only
//! - No rendering, storage or input-device dependencies

pub mod autopilot;
pub mod collision;
pub mod platforms;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{is_colliding, landing_platform};
pub use platforms::{Platform, PlatformField};
pub use scoring::HeightTracker;
pub use state::{Direction, FrameSnapshot, GameEvent, Player, SimulationState};
pub use tick::{TickInput, advance, tick};
