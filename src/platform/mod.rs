//! Platform abstraction layer
//!
//! Everything between the host and the simulation:
//! - Input sources (live browser input, scripted replays)
//! - The frame driver that the host's scheduler calls once per frame

pub mod driver;
pub mod input;

pub use driver::Driver;
pub use input::{InputSource, ReplayInput, SharedInput};
