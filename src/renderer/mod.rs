//! Presentation layer
//!
//! The simulation never draws. Each frame the driver hands a `Snapshot` to a
//! `PresentationSink`, which turns it into shapes and puts them somewhere:
//! a browser canvas, or nowhere at all for headless runs.

pub mod headless;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use headless::HeadlessSink;
pub use shapes::{Shape, TextAlign, scene, score_label};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSink;

use crate::sim::{Score, Snapshot};

/// Consumer of per-frame state
pub trait PresentationSink {
    /// Draw the current frame
    fn present(&mut self, snapshot: &Snapshot);

    /// The opponent reached the win score; the match has already restarted
    fn match_over(&mut self, final_score: &Score);
}
