//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BAND_ANGLES_DEG, aabb_overlap, deflect_velocity, paddle_band};
pub use state::{Ball, MatchPhase, MatchState, Paddle, Rect, Snapshot};
pub use tick::{TickInput, tick};
