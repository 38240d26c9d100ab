//! Input mapping
//!
//! Hosts forward raw key names (`KeyboardEvent.key` style) or pointer event
//! types; anything unrecognized is dropped.

use serde::{Deserialize, Serialize};

/// A game-level input action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Jump while playing, restart after game over
    Activate,
    /// Restart after game over
    Reset,
}

impl Action {
    /// Map a key name or pointer event type to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" | "Spacebar" | "ArrowUp" | "w" | "W" | "Enter" => Some(Action::Activate),
            "pointerdown" | "mousedown" | "touchstart" | "click" => Some(Action::Activate),
            "r" | "R" => Some(Action::Reset),
            _ => None,
        }
    }
}
