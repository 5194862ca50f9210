//! Display-less sink for native runs and tests

use super::PresentationSink;
use super::shapes::{Shape, scene};
use crate::consts::CANVAS_WIDTH;
use crate::settings::Settings;
use crate::sim::{Score, Snapshot};

/// Builds every frame's shapes but only keeps the latest
#[derive(Debug, Clone, Default)]
pub struct HeadlessSink {
    settings: Settings,
    frames: u64,
    last_scene: Vec<Shape>,
    results: Vec<Score>,
}

impl HeadlessSink {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Shapes of the most recent frame
    pub fn last_scene(&self) -> &[Shape] {
        &self.last_scene
    }

    /// Final scores of every finished match, oldest first
    pub fn results(&self) -> &[Score] {
        &self.results
    }
}

impl PresentationSink for HeadlessSink {
    fn present(&mut self, snapshot: &Snapshot) {
        self.last_scene = scene(snapshot, &self.settings, CANVAS_WIDTH);
        self.frames += 1;
    }

    fn match_over(&mut self, final_score: &Score) {
        log::info!("GAME OVER, Score:{}", final_score.player);
        self.results.push(*final_score);
    }
}
