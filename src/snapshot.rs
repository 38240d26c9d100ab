//! Read-only view of the simulation for renderers
//!
//! Nothing here feeds back into the simulation. The rotation hint is
//! cosmetic and not part of the game state.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

use crate::settings::Tuning;
use crate::sim::GameState;

/// Instance kinds for `RectInstance::kind`
pub mod kinds {
    pub const BIRD: u32 = 0;
    pub const PIPE_TOP: u32 = 1;
    pub const PIPE_BOTTOM: u32 = 2;
}

/// One axis-aligned rectangle, laid out for instanced drawing
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// Top-left corner
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub kind: u32,
    pub _pad: u32,
}

impl RectInstance {
    pub const fn new(position: Vec2, size: Vec2, kind: u32) -> Self {
        Self {
            position: [position.x, position.y],
            size: [size.x, size.y],
            kind,
            _pad: 0,
        }
    }
}

/// Pipe geometry as seen by a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeView {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub passed: bool,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub screen_size: Vec2,
    pub bird_pos: Vec2,
    pub bird_size: Vec2,
    /// Tilt in radians (nose up is negative)
    pub bird_rotation: f32,
    pub pipes: Vec<PipeView>,
    pub score: u32,
    pub best_score: u32,
    pub game_over: bool,
}

/// Tilt derived from vertical velocity, clamped to the tuning's range
pub fn rotation_hint(vel: f32, tuning: &Tuning) -> f32 {
    (vel * tuning.rotation_factor)
        .max(tuning.rotation_min)
        .min(tuning.rotation_max)
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        Self {
            screen_size: Vec2::new(tuning.screen_width, tuning.screen_height),
            bird_pos: state.bird.pos,
            bird_size: state.bird.size,
            bird_rotation: rotation_hint(state.bird.vel, tuning),
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    id: p.id,
                    x: p.x,
                    width: p.width,
                    gap_top: p.gap_top,
                    gap_bottom: p.gap_bottom(),
                    passed: p.passed,
                })
                .collect(),
            score: state.score,
            best_score: state.best_score,
            game_over: state.is_game_over(),
        }
    }

    /// Bird plus the two solids of every pipe, ready for `bytemuck::cast_slice`
    pub fn rect_instances(&self) -> Vec<RectInstance> {
        let mut instances = Vec::with_capacity(1 + self.pipes.len() * 2);
        instances.push(RectInstance::new(self.bird_pos, self.bird_size, kinds::BIRD));

        for pipe in &self.pipes {
            instances.push(RectInstance::new(
                Vec2::new(pipe.x, 0.0),
                Vec2::new(pipe.width, pipe.gap_top),
                kinds::PIPE_TOP,
            ));
            let bottom_height = (self.screen_size.y - pipe.gap_bottom).max(0.0);
            instances.push(RectInstance::new(
                Vec2::new(pipe.x, pipe.gap_bottom),
                Vec2::new(pipe.width, bottom_height),
                kinds::PIPE_BOTTOM,
            ));
        }

        instances
    }
}
