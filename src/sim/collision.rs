//! Axis-aligned collision tests
//!
//! Everything in the playfield is an axis-aligned box in screen space
//! (origin top-left, y grows downward). Overlap tests use strict inequalities:
//! boxes that only share an edge do not touch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLATFORM_HEIGHT;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict horizontal range overlap
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.bottom() > other.top() && self.top() < other.bottom()
    }
}

/// Whether a body whose next bounds are `body` lands on a platform top.
///
/// The body lands when the horizontal ranges overlap and its bottom edge lies
/// inside the platform's band `[top, top + PLATFORM_HEIGHT]` while it was not
/// moving upward (`vel_y >= 0`) at the start of the tick.
pub fn lands_on(body: &Rect, vel_y: f32, platform: &Rect) -> bool {
    let bottom = body.bottom();
    body.overlaps_x(platform)
        && bottom >= platform.top()
        && bottom <= platform.top() + PLATFORM_HEIGHT
        && vel_y >= 0.0
}
