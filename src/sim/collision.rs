//! Axis-aligned collision detection
//!
//! A pipe is two solid rectangles (above and below the gap). Testing the bird
//! against both collapses into a single gap-window predicate: while the
//! horizontal spans overlap, the bird must sit fully inside the gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Horizontal spans overlap (touching edges do not)
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.right() > left && self.left() < right
    }

    /// Full AABB overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_x(other.left(), other.right())
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// Check the bird against a pipe's gap window
///
/// Returns true when the span `pipe_x..pipe_x + pipe_width` and the bird's
/// horizontal extent overlap by more than a shared edge and the bird pokes above `gap_top` or below
/// `gap_bottom`.
pub fn gap_collision(
    bird: &Rect,
    pipe_x: f32,
    pipe_width: f32,
    gap_top: f32,
    gap_bottom: f32,
) -> bool {
    bird.overlaps_x(pipe_x, pipe_x + pipe_width)
        && (bird.top() < gap_top || bird.bottom() > gap_bottom)
}

/// Check if the bird left the playfield vertically
pub fn out_of_bounds(bird: &Rect, screen_height: f32) -> bool {
    bird.top() < 0.0 || bird.bottom() > screen_height
}
