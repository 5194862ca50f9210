//! Frame driver
//!
//! The host's scheduler (requestAnimationFrame, a loop, a test) calls `frame`
//! once per display frame. The simulation itself never schedules anything.

use super::input::InputSource;
use crate::renderer::PresentationSink;
use crate::sim::{GameEvent, GameState, advance};

/// Owns the game state and wires an input source to a presentation sink
pub struct Driver<I, S> {
    state: GameState,
    input: I,
    sink: S,
}

impl<I: InputSource, S: PresentationSink> Driver<I, S> {
    pub fn new(input: I, sink: S) -> Self {
        log::info!("New match");
        Self {
            state: GameState::new(),
            input,
            sink,
        }
    }

    /// Poll input, advance one tick, report the terminal event and present.
    /// Returns the events raised by this tick.
    pub fn frame(&mut self) -> &[GameEvent] {
        let input = self.input.current_input();
        advance(&mut self.state, &input);

        for event in &self.state.events {
            if let GameEvent::MatchOver { final_score } = event {
                self.sink.match_over(final_score);
            }
        }

        self.sink.present(&self.state.snapshot());
        &self.state.events
    }

    /// Run `frames` frames back to back
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.frame();
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
