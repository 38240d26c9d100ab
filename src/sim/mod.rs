//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Time comes in as an argument, never read from the host
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, gap_collision, out_of_bounds};
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
