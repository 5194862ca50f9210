//! Shape generation for 2D primitives
//!
//! Turns a simulation snapshot into the handful of canvas primitives that make
//! up a frame. Backends only need to know how to fill circles, rectangles and
//! text.

use glam::Vec2;

use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::settings::Settings;
use crate::sim::{Score, Snapshot};

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A filled 2D primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Rect {
        /// Top-left corner
        origin: Vec2,
        size: Vec2,
        color: String,
    },
    Text {
        /// Baseline anchor
        pos: Vec2,
        text: String,
        font: String,
        align: TextAlign,
        color: String,
    },
}

/// Score label, e.g. `"3                7"` with the default gap
pub fn score_label(score: &Score, gap: usize) -> String {
    format!("{}{}{}", score.player, " ".repeat(gap), score.opponent)
}

/// Filled circle for the ball
pub fn ball(snapshot: &Snapshot, color: &str) -> Shape {
    Shape::Circle {
        center: snapshot.ball_pos,
        radius: snapshot.ball_radius,
        color: color.to_string(),
    }
}

/// Filled rectangle for a paddle whose top-left corner is `origin`
pub fn paddle(origin: Vec2, color: &str) -> Shape {
    Shape::Rect {
        origin,
        size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        color: color.to_string(),
    }
}

/// Everything drawn for one frame, back to front
pub fn scene(snapshot: &Snapshot, settings: &Settings, canvas_width: f32) -> Vec<Shape> {
    vec![
        ball(snapshot, &settings.ball_color),
        paddle(snapshot.player_paddle, &settings.paddle_color),
        paddle(snapshot.opponent_paddle, &settings.paddle_color),
        Shape::Text {
            pos: Vec2::new(canvas_width / 2.0, settings.score_y),
            text: score_label(&snapshot.score, settings.score_gap),
            font: settings.score_font.clone(),
            align: TextAlign::Center,
            color: settings.score_color.clone(),
        },
    ]
}
