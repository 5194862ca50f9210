//! Per-frame simulation step
//!
//! One call to `advance` is one tick. There is no delta time: the ball and
//! paddles move by their per-frame velocities.

use serde::{Deserialize, Serialize};

use super::collision::{ball_exit, ball_hits_paddle, bounce_angle, bounce_velocity, hits_wall};
use super::opponent::move_opponent_paddle;
use super::state::{GameEvent, GameState, Side};
use crate::clamp_paddle_y;
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// "Up" key held
    pub up_held: bool,
    /// "Down" key held
    pub down_held: bool,
    /// Pointer y relative to the playfield top, if the pointer moved since the last tick
    pub pointer_y: Option<f32>,
}

impl TickInput {
    pub fn up() -> Self {
        Self {
            up_held: true,
            ..Default::default()
        }
    }

    pub fn down() -> Self {
        Self {
            down_held: true,
            ..Default::default()
        }
    }

    pub fn pointer(y: f32) -> Self {
        Self {
            pointer_y: Some(y),
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame.
///
/// Events raised during the frame are left in `state.events`.
pub fn advance(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if let Some(pointer_y) = input.pointer_y {
        apply_pointer(state, pointer_y);
    }

    move_opponent_paddle(state);

    if handle_collision(state) == Outcome::MatchRestarted {
        return;
    }

    state.ball.integrate();

    move_player_paddle(state, input);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Continue,
    MatchRestarted,
}

/// Scoring, wall reflection and paddle bounces, evaluated before the ball moves
fn handle_collision(state: &mut GameState) -> Outcome {
    if let Some(exit) = ball_exit(&state.ball) {
        let scorer = exit.scorer();
        state.score.award(scorer);
        state.reposition();
        log::info!(
            "Point to {}: {} - {}",
            scorer.as_str(),
            state.score.player,
            state.score.opponent
        );
        state.events.push(GameEvent::PointScored {
            side: scorer,
            score: state.score,
        });

        if scorer == Side::Opponent && state.score.opponent >= WIN_SCORE {
            let final_score = state.score;
            log::info!(
                "Match over, final score {} - {}",
                final_score.player,
                final_score.opponent
            );
            state.events.push(GameEvent::MatchOver { final_score });
            state.restart_match();
            return Outcome::MatchRestarted;
        }
    } else if hits_wall(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
        log::debug!("Wall bounce at y={:.1}", state.ball.pos.y);
        state.events.push(GameEvent::WallBounce);
    }

    if ball_hits_paddle(&state.ball, &state.player) {
        bounce_ball(state, Side::Player);
    }

    if ball_hits_paddle(&state.ball, &state.opponent) {
        bounce_ball(state, Side::Opponent);
    }

    Outcome::Continue
}

/// Send the ball back off `side`'s paddle and speed up the next bounce
pub fn bounce_ball(state: &mut GameState, side: Side) {
    let angle = bounce_angle(state.ball.pos.y, state.paddle(side));
    let speed = state.ball_speed;
    state.ball.vel = bounce_velocity(angle, speed, side);
    state.ball_speed += BALL_SPEED_INCREMENT;

    log::debug!(
        "Paddle hit ({}): angle={:.1}deg speed={}",
        side.as_str(),
        angle.to_degrees(),
        speed
    );
    state.events.push(GameEvent::PaddleHit { side, angle, speed });
}

/// Pointer positions inside the playfield centre the paddle on the pointer
fn apply_pointer(state: &mut GameState, pointer_y: f32) {
    if pointer_y > 0.0 && pointer_y < CANVAS_HEIGHT {
        state.player.y = clamp_paddle_y(pointer_y - PADDLE_HEIGHT / 2.0);
    }
}

/// Held-key movement. A step that would leave the field is undone, not clamped.
fn move_player_paddle(state: &mut GameState, input: &TickInput) {
    let paddle = &mut state.player;
    if input.up_held {
        paddle.y -= PLAYER_PADDLE_STEP;
        if paddle.y < 0.0 {
            paddle.y += PLAYER_PADDLE_STEP;
        }
    } else if input.down_held {
        paddle.y += PLAYER_PADDLE_STEP;
        if paddle.y > CANVAS_HEIGHT - PADDLE_HEIGHT {
            paddle.y -= PLAYER_PADDLE_STEP;
        }
    }
}
