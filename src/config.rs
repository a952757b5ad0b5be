//! Match configuration
//!
//! All arena and entity dimensions are supplied once at construction and
//! never change for the lifetime of a match. Validation happens here so the
//! simulation itself stays total over its inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rejection reasons for a malformed match configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Arena width or height is not strictly positive
    NonPositiveArena,
    /// Paddle width or height is not strictly positive
    NonPositivePaddle,
    /// Ball size is not strictly positive
    NonPositiveBall,
    /// Paddle or ball speed is not strictly positive
    NonPositiveSpeed,
    /// Win score of zero would end the match before it starts
    ZeroWinScore,
    /// Paddle or ball does not fit inside the arena
    EntityTooLarge,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::NonPositiveArena => "arena dimensions must be positive",
            ConfigError::NonPositivePaddle => "paddle dimensions must be positive",
            ConfigError::NonPositiveBall => "ball size must be positive",
            ConfigError::NonPositiveSpeed => "paddle and ball speeds must be positive",
            ConfigError::ZeroWinScore => "win score must be at least 1",
            ConfigError::EntityTooLarge => "paddle and ball must fit inside the arena",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ConfigError {}

/// Fixed match parameters
///
/// Defaults mirror the classic table: 800x600 arena, 15x100 paddles inset
/// 50px from the side walls, a 20px ball, and first to 10 points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Arena width (pixels)
    pub arena_width: f32,
    /// Arena height (pixels)
    pub arena_height: f32,
    /// Paddle width (pixels)
    pub paddle_width: f32,
    /// Paddle height (pixels)
    pub paddle_height: f32,
    /// Horizontal distance from each side wall to its paddle
    pub paddle_inset: f32,
    /// Ball edge length (the ball is an axis-aligned square)
    pub ball_size: f32,
    /// Paddle movement per tick (pixels)
    pub paddle_speed: f32,
    /// Ball speed at multiplier 1.0 (pixels per tick)
    pub ball_base_speed: f32,
    /// Score that ends the match
    pub win_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            paddle_width: 15.0,
            paddle_height: 100.0,
            paddle_inset: 50.0,
            ball_size: 20.0,
            paddle_speed: 5.0,
            ball_base_speed: 4.0,
            win_score: 10,
        }
    }
}

impl MatchConfig {
    /// Check the configuration for values that would produce undefined physics
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::NonPositiveArena);
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(ConfigError::NonPositivePaddle);
        }
        if self.ball_size <= 0.0 {
            return Err(ConfigError::NonPositiveBall);
        }
        if self.paddle_speed <= 0.0 || self.ball_base_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed);
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        let paddles_fit = self.paddle_height <= self.arena_height
            && self.paddle_inset + self.paddle_width <= self.arena_width / 2.0;
        if !paddles_fit || self.ball_size > self.arena_height || self.ball_size > self.arena_width {
            return Err(ConfigError::EntityTooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_arena() {
        let config = MatchConfig {
            arena_width: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveArena));

        let config = MatchConfig {
            arena_height: -600.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveArena));
    }

    #[test]
    fn rejects_non_positive_entities() {
        let config = MatchConfig {
            paddle_height: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositivePaddle));

        let config = MatchConfig {
            ball_size: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveBall));
    }

    #[test]
    fn rejects_zero_win_score() {
        let config = MatchConfig {
            win_score: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn rejects_paddle_taller_than_arena() {
        let config = MatchConfig {
            paddle_height: 700.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EntityTooLarge));
    }
}
