//! Paddle Duel - a two-paddle arcade match core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `config`: Match configuration with construction-time validation
//! - `driver`: Fixed-timestep accumulator loop owned by the caller

pub mod config;
pub mod driver;
pub mod sim;

pub use config::{ConfigError, MatchConfig};
pub use driver::FixedStepDriver;

/// Game tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the original frame timer)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Speed multiplier gained per paddle hit
    pub const SPEED_STEP: f32 = 0.1;
    /// Hard cap on the speed multiplier
    pub const MAX_SPEED_MULTIPLIER: f32 = 3.0;

    /// Opponent stops steering when its center is within this distance of the target
    pub const OPPONENT_DEAD_ZONE: f32 = 15.0;
    /// Maximum random offset added to the opponent's aim point (pixels)
    pub const OPPONENT_AIM_JITTER: i32 = 20;

    /// Number of equal vertical paddle bands used for deflection
    pub const PADDLE_BANDS: usize = 5;
}
