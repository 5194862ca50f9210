//! Canvas 2D backend (browser only)

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::PresentationSink;
use super::shapes::{Shape, scene};
use crate::settings::Settings;
use crate::sim::{Score, Snapshot};

/// Draws frames onto an HTML canvas
pub struct CanvasSink {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    settings: Settings,
}

impl CanvasSink {
    pub fn new(canvas: &HtmlCanvasElement, ctx: CanvasRenderingContext2d, settings: Settings) -> Self {
        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            settings,
        }
    }

    fn draw(&self, shape: &Shape) {
        match shape {
            Shape::Circle { center, radius, color } => {
                self.ctx.begin_path();
                let _ = self
                    .ctx
                    .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                self.ctx.set_fill_style_str(color);
                self.ctx.fill();
                self.ctx.close_path();
            }
            Shape::Rect { origin, size, color } => {
                self.ctx.set_fill_style_str(color);
                self.ctx
                    .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
            }
            Shape::Text { pos, text, font, align, color } => {
                self.ctx.set_font(font);
                self.ctx.set_text_align(align.as_css());
                self.ctx.set_fill_style_str(color);
                if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                    log::warn!("fill_text failed: {:?}", e);
                }
            }
        }
    }
}

impl PresentationSink for CanvasSink {
    fn present(&mut self, snapshot: &Snapshot) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for shape in scene(snapshot, &self.settings, self.width as f32) {
            self.draw(&shape);
        }
    }

    fn match_over(&mut self, final_score: &Score) {
        let message = format!("GAME OVER, Score:{}", final_score.player);
        log::info!("{}", message);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
    }
}
