//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no delta time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{Exit, ball_exit, ball_hits_paddle, bounce_angle, bounce_velocity, hits_wall};
pub use opponent::move_opponent_paddle;
pub use state::{Ball, GameEvent, GameState, Paddle, Score, Side, Snapshot};
pub use tick::{TickInput, advance, bounce_ball};
