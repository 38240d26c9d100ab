//! Game tuning
//!
//! Every physics and collision constant lives here so independent
//! simulations can run with different balance.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TuningPreset {
    #[default]
    Classic,
    Floaty,
    Brisk,
}

impl TuningPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuningPreset::Classic => "Classic",
            TuningPreset::Floaty => "Floaty",
            TuningPreset::Brisk => "Brisk",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(TuningPreset::Classic),
            "floaty" | "float" => Some(TuningPreset::Floaty),
            "brisk" | "fast" => Some(TuningPreset::Brisk),
            _ => None,
        }
    }
}

/// Simulation tuning (all units are px, px/tick or milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Bird ===
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub gravity: f32,
    /// Velocity assigned on jump (negative = up)
    pub jump_strength: f32,

    // === Pipes ===
    pub pipe_width: f32,
    /// Height of the gap window
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    /// Gap keeps at least this far from the top and bottom edge
    pub gap_margin: f32,
    pub spawn_interval_ms: f64,

    // === Timing ===
    pub tick_ms: f64,
    pub max_substeps: u32,
    pub max_frame_ms: f64,

    // === Cosmetic ===
    pub rotation_factor: f32,
    pub rotation_min: f32,
    pub rotation_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            gap_margin: GAP_MARGIN,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            tick_ms: TICK_MS,
            max_substeps: MAX_SUBSTEPS,
            max_frame_ms: MAX_FRAME_MS,

            rotation_factor: ROTATION_FACTOR,
            rotation_min: ROTATION_MIN,
            rotation_max: ROTATION_MAX,
        }
    }
}

impl Tuning {
    /// Create tuning from a preset (applies preset overrides on top of defaults)
    pub fn from_preset(preset: TuningPreset) -> Self {
        let mut tuning = Self::default();
        tuning.apply_preset(preset);
        tuning
    }

    /// Apply a preset's physics constants
    pub fn apply_preset(&mut self, preset: TuningPreset) {
        match preset {
            TuningPreset::Classic => {
                self.gravity = GRAVITY;
                self.jump_strength = JUMP_STRENGTH;
                self.pipe_speed = PIPE_SPEED;
                self.spawn_interval_ms = SPAWN_INTERVAL_MS;
            }
            TuningPreset::Floaty => {
                self.gravity = 0.45;
                self.jump_strength = -9.5;
                self.pipe_speed = 2.5;
                self.spawn_interval_ms = 1700.0;
            }
            TuningPreset::Brisk => {
                self.gravity = 0.5;
                self.jump_strength = -10.0;
                self.pipe_speed = 3.0;
                self.spawn_interval_ms = 1600.0;
            }
        }
        log::info!("Tuning preset: {}", preset.as_str());
    }

    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Repair values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Tuning::default();

        if !(self.screen_width > 0.0) {
            log::warn!("screen_width {} invalid, using {}", self.screen_width, defaults.screen_width);
            self.screen_width = defaults.screen_width;
        }
        if !(self.screen_height > 0.0) {
            log::warn!("screen_height {} invalid, using {}", self.screen_height, defaults.screen_height);
            self.screen_height = defaults.screen_height;
        }
        if !(self.bird_width > 0.0) || !(self.bird_height > 0.0) {
            log::warn!("bird size invalid, using defaults");
            self.bird_width = defaults.bird_width;
            self.bird_height = defaults.bird_height;
        }
        if !(self.pipe_width > 0.0) {
            log::warn!("pipe_width {} invalid, using {}", self.pipe_width, defaults.pipe_width);
            self.pipe_width = defaults.pipe_width;
        }
        if !self.gravity.is_finite() {
            log::warn!("gravity {} invalid, using {}", self.gravity, defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if !(self.jump_strength < 0.0) {
            log::warn!("jump_strength {} must point up, negating", self.jump_strength);
            self.jump_strength = if self.jump_strength > 0.0 && self.jump_strength.is_finite() {
                -self.jump_strength
            } else {
                defaults.jump_strength
            };
        }
        if !(self.pipe_speed > 0.0 && self.pipe_speed.is_finite()) {
            log::warn!("pipe_speed {} invalid, using {}", self.pipe_speed, defaults.pipe_speed);
            self.pipe_speed = defaults.pipe_speed;
        }
        if !(self.spawn_interval_ms > 0.0 && self.spawn_interval_ms.is_finite()) {
            log::warn!(
                "spawn_interval_ms {} invalid, using {}",
                self.spawn_interval_ms,
                defaults.spawn_interval_ms
            );
            self.spawn_interval_ms = defaults.spawn_interval_ms;
        }
        if !(self.gap_margin >= 0.0) {
            log::warn!("gap_margin {} invalid, using 0", self.gap_margin);
            self.gap_margin = 0.0;
        }
        // Margins must leave room for a gap at least twice the bird's height
        let max_margin = ((self.screen_height - 2.0 * self.bird_height) / 2.0).max(0.0);
        if self.gap_margin > max_margin {
            log::warn!("gap_margin {} leaves no gap, using {}", self.gap_margin, max_margin);
            self.gap_margin = max_margin;
        }
        // Gap plus both margins must fit on screen
        let max_gap = self.screen_height - 2.0 * self.gap_margin;
        if !(self.pipe_gap > 0.0) || self.pipe_gap > max_gap {
            let gap = defaults.pipe_gap.min(max_gap).max(0.0);
            log::warn!("pipe_gap {} does not fit the screen, using {}", self.pipe_gap, gap);
            self.pipe_gap = gap;
        }
        if !(self.tick_ms > 0.0 && self.tick_ms.is_finite()) {
            log::warn!("tick_ms {} invalid, using {}", self.tick_ms, defaults.tick_ms);
            self.tick_ms = defaults.tick_ms;
        }
        if self.max_substeps == 0 {
            log::warn!("max_substeps 0 would stall the simulation, using 1");
            self.max_substeps = 1;
        }
        if !(self.max_frame_ms >= self.tick_ms) {
            log::warn!("max_frame_ms {} below one tick, using {}", self.max_frame_ms, self.tick_ms);
            self.max_frame_ms = self.tick_ms;
        }
        if !self.rotation_factor.is_finite() {
            self.rotation_factor = defaults.rotation_factor;
        }
        if !(self.rotation_min.is_finite() && self.rotation_max.is_finite()) {
            log::warn!("rotation range invalid, using defaults");
            self.rotation_min = defaults.rotation_min;
            self.rotation_max = defaults.rotation_max;
        }
        if self.rotation_min > self.rotation_max {
            std::mem::swap(&mut self.rotation_min, &mut self.rotation_max);
        }

        self
    }

    /// Lowest and highest `gap_top` a new pipe can draw
    pub fn gap_top_range(&self) -> (f32, f32) {
        let lo = self.gap_margin;
        let hi = self.screen_height - self.pipe_gap - self.gap_margin;
        (lo, hi.max(lo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in [TuningPreset::Classic, TuningPreset::Floaty, TuningPreset::Brisk] {
            assert_eq!(TuningPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(TuningPreset::from_str("FAST"), Some(TuningPreset::Brisk));
        assert_eq!(TuningPreset::from_str("nightmare"), None);
    }

    #[test]
    fn test_default_gap_range() {
        let tuning = Tuning::default();
        let (lo, hi) = tuning.gap_top_range();
        assert_eq!(lo, 50.0);
        // 600 - 150 - 100 of range width above the 50 px margin
        assert_eq!(hi, 400.0);
    }

    #[test]
    fn test_from_json_partial() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.45, "pipe_speed": 2.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.45);
        assert_eq!(tuning.pipe_speed, 2.5);
        assert_eq!(tuning.pipe_gap, PIPE_GAP);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_sanitize_repairs() {
        let tuning = Tuning {
            jump_strength: 9.0,
            pipe_gap: 1000.0,
            tick_ms: 0.0,
            max_substeps: 0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(tuning.jump_strength, -9.0);
        assert_eq!(tuning.pipe_gap, PIPE_GAP);
        assert_eq!(tuning.tick_ms, TICK_MS);
        assert_eq!(tuning.max_substeps, 1);
    }

    #[test]
    fn test_sanitize_scroll_and_spawn() {
        let tuning = Tuning::from_json(r#"{ "pipe_speed": -3.0, "spawn_interval_ms": -1.0 }"#)
            .unwrap();
        assert_eq!(tuning.pipe_speed, PIPE_SPEED);
        assert_eq!(tuning.spawn_interval_ms, SPAWN_INTERVAL_MS);

        let tuning = Tuning {
            pipe_speed: 0.0,
            spawn_interval_ms: f64::NAN,
            gravity: f32::INFINITY,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.pipe_speed, PIPE_SPEED);
        assert_eq!(tuning.spawn_interval_ms, SPAWN_INTERVAL_MS);
        assert_eq!(tuning.gravity, GRAVITY);

        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_sanitize_huge_margin_keeps_a_gap() {
        let tuning = Tuning {
            gap_margin: 300.0,
            ..Default::default()
        }
        .sanitized();
        // Room for a gap of at least two bird heights
        assert_eq!(tuning.gap_margin, 276.0);
        assert!(tuning.pipe_gap > 0.0);
        assert!(tuning.pipe_gap <= tuning.screen_height - 2.0 * tuning.gap_margin);

        let (lo, hi) = tuning.gap_top_range();
        assert!(hi >= lo);
    }

    #[test]
    fn test_sanitize_nan_timing_and_rotation() {
        let tuning = Tuning {
            max_frame_ms: f64::NAN,
            rotation_min: f32::NAN,
            rotation_max: 1.0,
            rotation_factor: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.max_frame_ms, tuning.tick_ms);
        assert_eq!(tuning.rotation_min, ROTATION_MIN);
        assert_eq!(tuning.rotation_max, ROTATION_MAX);
        assert_eq!(tuning.rotation_factor, ROTATION_FACTOR);
    }

    #[test]
    fn test_sanitize_keeps_valid() {
        let tuning = Tuning::from_preset(TuningPreset::Floaty);
        assert_eq!(tuning.clone().sanitized(), tuning);
    }
}
