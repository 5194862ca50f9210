//! Input sources
//!
//! The simulation polls one `TickInput` per frame. Live input is written by
//! host event handlers into a `SharedInput` between frames; tests and headless
//! runs use a `ReplayInput` instead.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::sim::TickInput;

/// Anything that can produce the input for the next tick
pub trait InputSource {
    fn current_input(&mut self) -> TickInput;
}

#[derive(Debug, Default)]
struct InputCell {
    up_held: AtomicBool,
    down_held: AtomicBool,
    /// f32 bit pattern of the last pointer y
    pointer_bits: AtomicU32,
    pointer_moved: AtomicBool,
}

/// Input written by event handlers and read by the frame driver.
///
/// Clones share the same cell, so one clone can live in each event handler
/// while another is polled. Held keys are levels; pointer movement is an edge
/// that is consumed by the next poll.
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    cell: Arc<InputCell>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_up(&self, held: bool) {
        self.cell.up_held.store(held, Ordering::Relaxed);
    }

    pub fn set_down(&self, held: bool) {
        self.cell.down_held.store(held, Ordering::Relaxed);
    }

    /// Record a pointer position, in playfield coordinates
    pub fn pointer_moved(&self, y: f32) {
        self.cell.pointer_bits.store(y.to_bits(), Ordering::Relaxed);
        // Release pairs with the Acquire swap in `current_input`
        self.cell.pointer_moved.store(true, Ordering::Release);
    }
}

impl InputSource for SharedInput {
    fn current_input(&mut self) -> TickInput {
        let pointer_y = if self.cell.pointer_moved.swap(false, Ordering::Acquire) {
            Some(f32::from_bits(self.cell.pointer_bits.load(Ordering::Relaxed)))
        } else {
            None
        };

        TickInput {
            up_held: self.cell.up_held.load(Ordering::Relaxed),
            down_held: self.cell.down_held.load(Ordering::Relaxed),
            pointer_y,
        }
    }
}

/// Plays back a fixed input sequence, then idles
#[derive(Debug, Clone, Default)]
pub struct ReplayInput {
    frames: Vec<TickInput>,
    cursor: usize,
}

impl ReplayInput {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// No input on any frame
    pub fn idle() -> Self {
        Self::default()
    }

    /// Frames not yet played
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl InputSource for ReplayInput {
    fn current_input(&mut self) -> TickInput {
        let input = self.frames.get(self.cursor).copied().unwrap_or_default();
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_input_levels_persist() {
        let handler = SharedInput::new();
        let mut poller = handler.clone();

        handler.set_up(true);
        assert!(poller.current_input().up_held);
        assert!(poller.current_input().up_held);

        handler.set_up(false);
        handler.set_down(true);
        let input = poller.current_input();
        assert!(!input.up_held);
        assert!(input.down_held);
    }

    #[test]
    fn test_pointer_consumed_once() {
        let handler = SharedInput::new();
        let mut poller = handler.clone();

        handler.pointer_moved(10.0);
        handler.pointer_moved(250.5);
        assert_eq!(poller.current_input().pointer_y, Some(250.5));
        assert_eq!(poller.current_input().pointer_y, None);
    }

    #[test]
    fn test_replay_then_idle() {
        let mut replay = ReplayInput::new(vec![TickInput::up(), TickInput::pointer(99.0)]);
        assert_eq!(replay.remaining(), 2);
        assert_eq!(replay.current_input(), TickInput::up());
        assert_eq!(replay.current_input(), TickInput::pointer(99.0));
        assert_eq!(replay.remaining(), 0);
        assert_eq!(replay.current_input(), TickInput::default());
        assert_eq!(replay.current_input(), TickInput::default());
    }
}
