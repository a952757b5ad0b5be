//! Fixed timestep simulation tick
//!
//! Advances one match deterministically. The caller owns the clock and the
//! RNG; given the same seed and input sequence, two matches stay identical.

use rand::Rng;

use super::collision::{aabb_overlap, deflect_velocity, paddle_band};
use super::state::{MatchPhase, MatchState};
use crate::consts::{MAX_SPEED_MULTIPLIER, OPPONENT_AIM_JITTER, OPPONENT_DEAD_ZONE, SPEED_STEP};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Up movement key currently held
    pub move_up: bool,
    /// Down movement key currently held
    pub move_down: bool,
    /// Serve the ball (one-shot, honored in `Idle`)
    pub start: bool,
    /// Reset the match (one-shot, honored in `Finished`)
    pub restart: bool,
}

/// Which paddle the ball struck
#[derive(Debug, Clone, Copy)]
enum Side {
    Player,
    Opponent,
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput, rng: &mut impl Rng) {
    match state.phase {
        MatchPhase::Finished => {
            if input.restart {
                log::info!("match restarted");
                state.reset();
            }
            return;
        }
        MatchPhase::Idle => {
            if input.start {
                serve(state, rng);
            }
            return;
        }
        MatchPhase::Active => {}
    }

    state.time_ticks += 1;

    // Integrate ball position
    state.ball.integrate();

    // Vertical wall bounce: velocity is negated without repositioning, so the
    // ball may overshoot the bound by up to one step before the next tick
    // pulls it back inside. The overshoot is bounded by the capped ball speed.
    let arena_height = state.config().arena_height;
    if state.ball.rect.top() <= 0.0 || state.ball.rect.bottom() >= arena_height {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle collisions, player first
    if aabb_overlap(&state.player_paddle.rect, &state.ball.rect) {
        deflect_off(state, Side::Player);
    } else if aabb_overlap(&state.opponent_paddle.rect, &state.ball.rect) {
        deflect_off(state, Side::Opponent);
    }

    steer_opponent(state, rng);
    move_player(state, input);
    check_scoring(state);
}

/// Put the ball in motion toward the opponent with a small random vertical lean
fn serve(state: &mut MatchState, rng: &mut impl Rng) {
    let lean = rng.random_range(-1..=1) as f32;
    state.ball.vel = glam::Vec2::new(state.config().ball_base_speed, lean);
    state.phase = MatchPhase::Active;
    log::debug!("serve: vel=({}, {})", state.ball.vel.x, state.ball.vel.y);
}

/// Re-aim the ball off a struck paddle
///
/// The hit bumps the speed multiplier, then the band the ball's center fell
/// into picks the outgoing angle, with the horizontal sign forced away from
/// the struck side.
fn deflect_off(state: &mut MatchState, side: Side) {
    state.speed_multiplier = (state.speed_multiplier + SPEED_STEP).min(MAX_SPEED_MULTIPLIER);

    let (paddle_rect, away_sign) = match side {
        Side::Player => (state.player_paddle.rect, 1.0),
        Side::Opponent => (state.opponent_paddle.rect, -1.0),
    };
    let band = paddle_band(&paddle_rect, &state.ball.rect);
    let speed = state.config().ball_base_speed * state.speed_multiplier;
    state.ball.vel = deflect_velocity(band, speed, away_sign);

    log::debug!(
        "{:?} paddle hit: band={} multiplier={:.1}",
        side,
        band,
        state.speed_multiplier
    );
}

/// Imperfect ball tracking for the opponent paddle
///
/// Aims at the ball's vertical center plus a bounded random offset and takes
/// one speed step toward it unless already within the dead-zone, so the
/// opponent wobbles and whiffs instead of playing perfectly.
fn steer_opponent(state: &mut MatchState, rng: &mut impl Rng) {
    let config = *state.config();
    let jitter = rng.random_range(-OPPONENT_AIM_JITTER..=OPPONENT_AIM_JITTER) as f32;
    let target = state.ball.rect.center().y + jitter;
    let center = state.opponent_paddle.rect.center().y;

    if center < target - OPPONENT_DEAD_ZONE {
        state
            .opponent_paddle
            .move_by(config.paddle_speed, config.arena_height);
    } else if center > target + OPPONENT_DEAD_ZONE {
        state
            .opponent_paddle
            .move_by(-config.paddle_speed, config.arena_height);
    }
}

/// One speed step per held directional flag, clamped to the arena
fn move_player(state: &mut MatchState, input: &TickInput) {
    let config = *state.config();
    if input.move_up {
        state
            .player_paddle
            .move_by(-config.paddle_speed, config.arena_height);
    }
    if input.move_down {
        state
            .player_paddle
            .move_by(config.paddle_speed, config.arena_height);
    }
}

/// Credit exits past either side wall, then end the match at the win score
fn check_scoring(state: &mut MatchState) {
    let config = *state.config();

    if state.ball.rect.pos.x < 0.0 {
        state.opponent_score += 1;
        state.reset_ball();
        state.phase = MatchPhase::Idle;
        log::info!(
            "opponent scores: {} - {}",
            state.player_score,
            state.opponent_score
        );
    } else if state.ball.rect.pos.x > config.arena_width {
        state.player_score += 1;
        state.reset_ball();
        state.phase = MatchPhase::Idle;
        log::info!(
            "player scores: {} - {}",
            state.player_score,
            state.opponent_score
        );
    }

    if state.player_score >= config.win_score || state.opponent_score >= config.win_score {
        state.phase = MatchPhase::Finished;
        log::info!(
            "match over: {} - {}",
            state.player_score,
            state.opponent_score
        );
    }
}
