//! Game state and core simulation types
//!
//! Everything the engine mutates lives in `GameState`; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::centred_paddle_y;

/// Which paddle (and which scoring side) something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle on the left
    Player,
    /// Scripted paddle on the right
    Opponent,
}

impl Side {
    /// Horizontal launch direction after a bounce off this side's paddle
    pub fn launch_sign(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Topmost y of the ball
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Bottommost y of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Euler step: one tick of free flight
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// A paddle. `x` never changes; `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    /// Paddle at its side's fixed column, vertically centred
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Player => PLAYER_PADDLE_X,
            Side::Opponent => OPPONENT_PADDLE_X,
        };
        Self {
            side,
            x,
            y: centred_paddle_y(),
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + PADDLE_HEIGHT
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PADDLE_WIDTH
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Add one point for `side`, returning the new total
    pub fn award(&mut self, side: Side) -> u32 {
        let counter = match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        };
        *counter += 1;
        *counter
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit {
        side: Side,
        /// Launch angle in radians, in [-MAX_BOUNCE_ANGLE, MAX_BOUNCE_ANGLE] for hits within the paddle span
        angle: f32,
        /// Speed the ball left the paddle with
        speed: f32,
    },
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball left the field; `side` scored
    PointScored { side: Side, score: Score },
    /// Opponent reached the win score; the match has been restarted
    MatchOver { final_score: Score },
}

/// Read-only view handed to the presentation sink each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub player_paddle: Vec2,
    pub opponent_paddle: Vec2,
    pub score: Score,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    /// Scripted paddle vertical velocity (persists across points)
    pub opponent_dy: f32,
    /// Launch speed of the next paddle bounce
    pub ball_speed: f32,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh match: centred paddles, ball at centre heading left, 0-0
    pub fn new() -> Self {
        Self {
            ball: Ball::default(),
            player: Paddle::new(Side::Player),
            opponent: Paddle::new(Side::Opponent),
            opponent_dy: OPPONENT_PADDLE_DY,
            ball_speed: BALL_START_SPEED,
            score: Score::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Point reset: ball back to centre and launch speed back to baseline.
    /// Paddles and score are left alone.
    pub fn reposition(&mut self) {
        self.ball = Ball::default();
        self.ball_speed = BALL_START_SPEED;
    }

    /// Throw the whole match away and start over
    pub fn restart_match(&mut self) {
        let events = std::mem::take(&mut self.events);
        *self = Self::new();
        self.events = events;
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            player_paddle: Vec2::new(self.player.x, self.player.y),
            opponent_paddle: Vec2::new(self.opponent.x, self.opponent.y),
            score: self.score,
        }
    }
}
