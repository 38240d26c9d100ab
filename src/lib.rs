//! Gapfall - a one-button gap-threading arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `driver`: Fixed-timestep frame driver
//! - `platform`: Clock and input abstraction
//! - `snapshot`: Read-only view for renderers
//! - `settings`: Data-driven game tuning

pub mod driver;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use driver::{FrameDriver, FrameReport};
pub use settings::{Tuning, TuningPreset};
pub use snapshot::RenderSnapshot;

/// Default tuning values
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed into the accumulator (tab switches, debugger stops)
    pub const MAX_FRAME_MS: f64 = 250.0;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Bird defaults (never moves horizontally)
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Downward acceleration, px/tick²
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump, px/tick (negative is up)
    pub const JUMP_STRENGTH: f32 = -9.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Leftward scroll, px/tick
    pub const PIPE_SPEED: f32 = 3.0;
    /// Minimum distance between the gap and the top/bottom screen edge
    pub const GAP_MARGIN: f32 = 50.0;
    /// Wall-clock time between pipe spawns
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;

    /// Rotation hint (radians per px/tick of velocity, and its clamp range)
    pub const ROTATION_FACTOR: f32 = 0.05;
    pub const ROTATION_MIN: f32 = -0.45;
    pub const ROTATION_MAX: f32 = 1.2;
}
