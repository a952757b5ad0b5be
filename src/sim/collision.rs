//! Collision detection and deflection for axis-aligned rectangles
//!
//! The interesting part of the bounce: which of five vertical paddle bands
//! the ball's center hit decides the outgoing angle, so paddle placement is
//! aim control rather than a plain reflection.

use glam::Vec2;

use super::state::Rect;
use crate::consts::PADDLE_BANDS;

/// Deflection angle per paddle band, top to bottom (degrees)
pub const BAND_ANGLES_DEG: [f32; PADDLE_BANDS] = [-60.0, -30.0, 0.0, 30.0, 60.0];

/// Axis-aligned bounding box overlap test
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Which of the five equal vertical paddle bands the ball's center fell into
///
/// Clamped to the valid range, so contacts past the paddle's tips still map
/// to the outermost bands.
pub fn paddle_band(paddle: &Rect, ball: &Rect) -> usize {
    let band_height = paddle.size.y / PADDLE_BANDS as f32;
    let relative = ball.center().y - paddle.top();
    let band = (relative / band_height).floor() as i32;
    band.clamp(0, PADDLE_BANDS as i32 - 1) as usize
}

/// Outgoing velocity for a paddle hit
///
/// `away_sign` forces the horizontal component away from the struck paddle:
/// +1.0 for the left (player) paddle, -1.0 for the right (opponent) paddle.
pub fn deflect_velocity(band: usize, speed: f32, away_sign: f32) -> Vec2 {
    let angle = BAND_ANGLES_DEG[band].to_radians();
    Vec2::new(
        away_sign * (speed * angle.cos()).abs(),
        speed * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_hit_and_miss() {
        let paddle = Rect::new(50.0, 250.0, 15.0, 100.0);

        // Ball overlapping the paddle's right edge
        let ball = Rect::new(60.0, 290.0, 20.0, 20.0);
        assert!(aabb_overlap(&paddle, &ball));

        // Ball clear of the paddle
        let ball = Rect::new(100.0, 290.0, 20.0, 20.0);
        assert!(!aabb_overlap(&paddle, &ball));

        // Touching edges do not count as overlap
        let ball = Rect::new(65.0, 290.0, 20.0, 20.0);
        assert!(!aabb_overlap(&paddle, &ball));
    }

    #[test]
    fn test_paddle_band_selection() {
        let paddle = Rect::new(50.0, 250.0, 15.0, 100.0);

        // Ball center at paddle center -> middle band
        let ball = Rect::new(60.0, 290.0, 20.0, 20.0);
        assert_eq!(paddle_band(&paddle, &ball), 2);

        // Ball center near paddle top -> band 0
        let ball = Rect::new(60.0, 245.0, 20.0, 20.0);
        assert_eq!(paddle_band(&paddle, &ball), 0);

        // Ball center near paddle bottom -> band 4
        let ball = Rect::new(60.0, 335.0, 20.0, 20.0);
        assert_eq!(paddle_band(&paddle, &ball), 4);
    }

    #[test]
    fn test_paddle_band_clamps_outside_contacts() {
        let paddle = Rect::new(50.0, 250.0, 15.0, 100.0);

        // Ball center above the paddle entirely
        let ball = Rect::new(60.0, 220.0, 20.0, 20.0);
        assert_eq!(paddle_band(&paddle, &ball), 0);

        // Ball center below the paddle entirely
        let ball = Rect::new(60.0, 360.0, 20.0, 20.0);
        assert_eq!(paddle_band(&paddle, &ball), 4);
    }

    #[test]
    fn test_middle_band_deflects_flat() {
        let vel = deflect_velocity(2, 4.0, 1.0);
        assert!((vel.x - 4.0).abs() < 1e-5);
        assert!(vel.y.abs() < 1e-5);
    }

    #[test]
    fn test_deflection_direction_forced_away() {
        // Band 0 aims upward regardless of side
        let off_player = deflect_velocity(0, 4.0, 1.0);
        assert!(off_player.x > 0.0);
        assert!(off_player.y < 0.0);

        let off_opponent = deflect_velocity(0, 4.0, -1.0);
        assert!(off_opponent.x < 0.0);
        assert!(off_opponent.y < 0.0);

        // Symmetric bands give symmetric vertical components
        let down = deflect_velocity(4, 4.0, 1.0);
        assert!((down.y + off_player.y).abs() < 1e-5);
    }

    #[test]
    fn test_deflection_speed_scales_with_multiplier() {
        let vel = deflect_velocity(1, 4.0 * 1.5, 1.0);
        assert!((vel.length() - 6.0).abs() < 1e-4);
    }
}
