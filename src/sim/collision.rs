//! Collision detection and bounce response
//!
//! Every check looks one frame ahead: it tests the ball's current position
//! plus the velocity about to be applied, before the position update runs.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Where the ball is relative to the left/right goal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Past the left edge; the opponent scores
    Left,
    /// Past the right edge; the player scores
    Right,
}

impl Exit {
    /// Side awarded the point
    pub fn scorer(self) -> Side {
        match self {
            Exit::Left => Side::Opponent,
            Exit::Right => Side::Player,
        }
    }
}

/// Check whether the ball centre has left the field horizontally
pub fn ball_exit(ball: &Ball) -> Option<Exit> {
    if ball.pos.x < 0.0 {
        Some(Exit::Left)
    } else if ball.pos.x > CANVAS_WIDTH {
        Some(Exit::Right)
    } else {
        None
    }
}

/// True when the next step would push the ball through the top or bottom wall
pub fn hits_wall(ball: &Ball) -> bool {
    ball.top() + ball.vel.y < 0.0 || ball.bottom() + ball.vel.y > CANVAS_HEIGHT
}

/// Loose paddle contact test.
///
/// The ball's leading edge (left edge for the player paddle, right edge for
/// the opponent) after the pending step must fall strictly inside the paddle's
/// horizontal span, and the ball *centre* must lie strictly inside its
/// vertical span. This is not a circle/rectangle overlap: a ball clipping a
/// paddle corner with its centre outside the span passes through.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let leading_edge = match paddle.side {
        Side::Player => ball.pos.x - ball.radius + ball.vel.x,
        Side::Opponent => ball.pos.x + ball.radius + ball.vel.x,
    };

    leading_edge > paddle.x
        && leading_edge < paddle.right()
        && ball.pos.y > paddle.y
        && ball.pos.y < paddle.bottom()
}

/// Launch angle for a ball meeting the paddle at `ball_y`.
///
/// The offset from the paddle centre is normalised by half the paddle height
/// and mapped linearly onto [-MAX_BOUNCE_ANGLE, MAX_BOUNCE_ANGLE]. Positive
/// angles point down the screen.
pub fn bounce_angle(ball_y: f32, paddle: &Paddle) -> f32 {
    let half_height = PADDLE_HEIGHT / 2.0;
    let relative = (ball_y - paddle.center_y()) / half_height;
    MAX_BOUNCE_ANGLE * relative
}

/// Velocity leaving a paddle at `angle` with magnitude `speed`
pub fn bounce_velocity(angle: f32, speed: f32, side: Side) -> Vec2 {
    Vec2::new(
        side.launch_sign() * speed * angle.cos(),
        speed * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: BALL_RADIUS,
        }
    }

    #[test]
    fn test_ball_exit() {
        assert_eq!(ball_exit(&ball_at(-0.1, 300.0, -4.0, 0.0)), Some(Exit::Left));
        assert_eq!(ball_exit(&ball_at(800.5, 300.0, 4.0, 0.0)), Some(Exit::Right));
        assert_eq!(ball_exit(&ball_at(0.0, 300.0, -4.0, 0.0)), None);
        assert_eq!(ball_exit(&ball_at(800.0, 300.0, 4.0, 0.0)), None);
        assert_eq!(Exit::Left.scorer(), Side::Opponent);
        assert_eq!(Exit::Right.scorer(), Side::Player);
    }

    #[test]
    fn test_wall_uses_projected_edges() {
        // Top edge at 12, moving up 3: stays inside
        assert!(!hits_wall(&ball_at(400.0, 22.0, 0.0, -3.0)));
        // Top edge at 2, moving up 3: would cross
        assert!(hits_wall(&ball_at(400.0, 12.0, 0.0, -3.0)));
        // Same spot moving down: no flip
        assert!(!hits_wall(&ball_at(400.0, 12.0, 0.0, 3.0)));
        // Bottom edge at 598, moving down 3: would cross
        assert!(hits_wall(&ball_at(400.0, 588.0, 0.0, 3.0)));
        // Exactly touching the wall after the step is not a crossing
        assert!(!hits_wall(&ball_at(400.0, 587.0, 0.0, 3.0)));
    }

    #[test]
    fn test_player_paddle_contact() {
        let paddle = Paddle::new(Side::Player);
        // Left edge after step: 48 - 10 - 4 = 34, inside (20, 35)
        assert!(ball_hits_paddle(&ball_at(48.0, 300.0, -4.0, 0.0), &paddle));
        // One frame earlier the edge is at 38, outside
        assert!(!ball_hits_paddle(&ball_at(52.0, 300.0, -4.0, 0.0), &paddle));
        // Ball centre above the paddle top
        assert!(!ball_hits_paddle(&ball_at(48.0, 239.0, -4.0, 0.0), &paddle));
    }

    #[test]
    fn test_opponent_paddle_contact() {
        let paddle = Paddle::new(Side::Opponent);
        // Right edge after step: 752 + 10 + 4 = 766, inside (765, 780)
        assert!(ball_hits_paddle(&ball_at(752.0, 300.0, 4.0, 0.0), &paddle));
        assert!(!ball_hits_paddle(&ball_at(748.0, 300.0, 4.0, 0.0), &paddle));
    }

    #[test]
    fn test_corner_clip_passes_through() {
        // The ball's rim overlaps the paddle's top corner but its centre is
        // above the paddle, so the loose test reports no contact.
        let paddle = Paddle::new(Side::Player);
        let ball = ball_at(40.0, paddle.y - 5.0, -4.0, 0.0);
        assert!(ball.bottom() > paddle.y);
        assert!(!ball_hits_paddle(&ball, &paddle));
    }

    #[test]
    fn test_bounce_angle_center_and_edges() {
        let paddle = Paddle::new(Side::Player);
        assert_eq!(bounce_angle(paddle.center_y(), &paddle), 0.0);
        assert!((bounce_angle(paddle.y, &paddle) + MAX_BOUNCE_ANGLE).abs() < 1e-6);
        assert!((bounce_angle(paddle.bottom(), &paddle) - MAX_BOUNCE_ANGLE).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_velocity_direction() {
        let v = bounce_velocity(0.0, 6.0, Side::Player);
        assert_eq!(v, Vec2::new(6.0, 0.0));
        let v = bounce_velocity(0.0, 6.0, Side::Opponent);
        assert_eq!(v, Vec2::new(-6.0, 0.0));
        let v = bounce_velocity(MAX_BOUNCE_ANGLE, 8.0, Side::Player);
        assert!(v.x > 0.0 && v.y > 0.0);
        assert!((v.length() - 8.0).abs() < 1e-4);
    }
}
