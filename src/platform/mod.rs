//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic clock for spawn timing and the frame accumulator)
//! - Input events (key/pointer names to game actions)

pub mod input;
pub mod time;

pub use input::Action;
pub use time::{Clock, ManualClock, SystemClock};
