//! Canvas Pong - one human paddle against one scripted paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring)
//! - `renderer`: Scene building and the presentation sinks
//! - `platform`: Input sources and the frame driver
//! - `settings`: Presentation/host options (never game rules)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults, shared by both sides
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PLAYER_PADDLE_X: f32 = 20.0;
    pub const OPPONENT_PADDLE_X: f32 = 765.0;
    /// Player paddle step per frame while a key is held
    pub const PLAYER_PADDLE_STEP: f32 = 6.0;
    /// Scripted paddle vertical velocity at match start
    pub const OPPONENT_PADDLE_DY: f32 = 3.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_DX: f32 = -4.0;
    pub const BALL_START_DY: f32 = 0.0;
    /// Launch speed of the first paddle bounce after a point
    pub const BALL_START_SPEED: f32 = 6.0;
    /// Added to the launch speed after every paddle bounce
    pub const BALL_SPEED_INCREMENT: f32 = 1.0;
    /// Steepest bounce off a paddle edge (60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Opponent score that ends the match
    pub const WIN_SCORE: u32 = 10;
}

/// Top-left y that centres a paddle vertically on the playfield
#[inline]
pub fn centred_paddle_y() -> f32 {
    (consts::CANVAS_HEIGHT - consts::PADDLE_HEIGHT) / 2.0
}

/// Clamp a paddle's top-left y into the playfield
#[inline]
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, consts::CANVAS_HEIGHT - consts::PADDLE_HEIGHT)
}
