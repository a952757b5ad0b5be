//! Match state and core simulation types
//!
//! Everything the renderer or a replay needs lives here; the tick function
//! mutates this state and nothing else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, MatchConfig};

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball motionless at center, waiting for a start command
    Idle,
    /// Ball in motion, physics advancing each tick
    Active,
    /// A side reached the win score; only restart leaves this phase
    Finished,
}

/// Axis-aligned rectangle, the only shape in the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A paddle, constrained to vertical motion within the arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Move vertically by `dy`, clamped to the arena's vertical bounds
    pub fn move_by(&mut self, dy: f32, arena_height: f32) {
        let max_y = arena_height - self.rect.size.y;
        self.rect.pos.y = (self.rect.pos.y + dy).clamp(0.0, max_y);
    }
}

/// The ball: a rect plus a per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
        }
    }

    /// Advance position by one velocity step (call once per tick)
    pub fn integrate(&mut self) {
        self.rect.pos += self.vel;
    }

    /// Park the ball with its center at `center`, motionless
    pub fn reset(&mut self, center: Vec2) {
        self.rect.pos = center - self.rect.size / 2.0;
        self.vel = Vec2::ZERO;
    }
}

/// Read-only view handed to the rendering collaborator after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_paddle: Rect,
    pub opponent_paddle: Rect,
    pub ball: Rect,
    pub player_score: u32,
    pub opponent_score: u32,
    pub phase: MatchPhase,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,
    /// Left paddle, driven by held directional input
    pub player_paddle: Paddle,
    /// Right paddle, driven by the built-in opponent
    pub opponent_paddle: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Grows by a fixed step per paddle hit, capped, reset on each point
    pub speed_multiplier: f32,
    pub phase: MatchPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    /// Create a match in `Idle` with everything at its starting position
    ///
    /// Rejects configurations that would produce undefined physics.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            config,
            player_paddle: Paddle::new(Rect::new(0.0, 0.0, 0.0, 0.0)),
            opponent_paddle: Paddle::new(Rect::new(0.0, 0.0, 0.0, 0.0)),
            ball: Ball::new(Rect::new(0.0, 0.0, config.ball_size, config.ball_size)),
            player_score: 0,
            opponent_score: 0,
            speed_multiplier: 1.0,
            phase: MatchPhase::Idle,
            time_ticks: 0,
        };
        state.reset();
        Ok(state)
    }

    /// The configuration this match was created with
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Arena center point
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.config.arena_width / 2.0, self.config.arena_height / 2.0)
    }

    /// Reset scores, paddles, ball, and multiplier to match start
    pub fn reset(&mut self) {
        let c = &self.config;
        let paddle_y = (c.arena_height - c.paddle_height) / 2.0;

        self.player_paddle = Paddle::new(Rect::new(
            c.paddle_inset,
            paddle_y,
            c.paddle_width,
            c.paddle_height,
        ));
        self.opponent_paddle = Paddle::new(Rect::new(
            c.arena_width - c.paddle_inset - c.paddle_width,
            paddle_y,
            c.paddle_width,
            c.paddle_height,
        ));
        self.ball = Ball::new(Rect::new(0.0, 0.0, c.ball_size, c.ball_size));
        self.ball.reset(self.arena_center());

        self.player_score = 0;
        self.opponent_score = 0;
        self.speed_multiplier = 1.0;
        self.phase = MatchPhase::Idle;
        self.time_ticks = 0;
    }

    /// Park the ball at center with zero velocity and drop back to multiplier 1.0
    pub fn reset_ball(&mut self) {
        let center = self.arena_center();
        self.ball.reset(center);
        self.speed_multiplier = 1.0;
    }

    /// Public view for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_paddle: self.player_paddle.rect,
            opponent_paddle: self.opponent_paddle.rect,
            ball: self.ball.rect,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_starts_idle_and_centered() {
        let state = MatchState::new(MatchConfig::default()).unwrap();
        assert_eq!(state.phase, MatchPhase::Idle);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.rect.center(), state.arena_center());
        assert_eq!(state.player_paddle.rect.left(), 50.0);
        assert_eq!(state.opponent_paddle.rect.right(), 750.0);
        // Paddles vertically centered
        assert_eq!(state.player_paddle.rect.center().y, 300.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MatchConfig {
            arena_height: 0.0,
            ..Default::default()
        };
        assert!(MatchState::new(config).is_err());
    }

    #[test]
    fn test_paddle_clamps_to_arena() {
        let mut paddle = Paddle::new(Rect::new(50.0, 3.0, 15.0, 100.0));
        paddle.move_by(-5.0, 600.0);
        assert_eq!(paddle.rect.top(), 0.0);

        paddle.move_by(1000.0, 600.0);
        assert_eq!(paddle.rect.bottom(), 600.0);
    }

    #[test]
    fn test_ball_reset_is_motionless_at_center() {
        let mut ball = Ball::new(Rect::new(10.0, 10.0, 20.0, 20.0));
        ball.vel = Vec2::new(4.0, -2.0);
        ball.reset(Vec2::new(400.0, 300.0));
        assert_eq!(ball.rect.center(), Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::ZERO);
    }
}
