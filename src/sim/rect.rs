//! Axis-aligned rectangle geometry
//!
//! Screen-space convention: `pos` is the top-left corner and y grows downward,
//! so an entity standing on the ground has `bottom() == GROUND_Y`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
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

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Shift the rectangle by `delta`
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Move vertically so the bottom edge lands on `bottom`
    pub fn move_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Change height while keeping the bottom edge fixed (pivot on the feet)
    pub fn set_height_keep_bottom(&mut self, height: f32) {
        let bottom = self.bottom();
        self.size.y = height;
        self.move_bottom(bottom);
    }

    /// Intersection rectangle, if the two overlap with non-zero area
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.pos.max(other.pos);
        let max = (self.pos + self.size).min(other.pos + other.size);
        let extent = max - min;
        if extent.x > 0.0 && extent.y > 0.0 {
            Some(Rect { pos: min, size: extent })
        } else {
            None
        }
    }

    /// Area of the overlap with `other` (0 when disjoint or only touching)
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        self.intersection(other)
            .map(|r| r.size.x * r.size.y)
            .unwrap_or(0.0)
    }

    /// True when the rectangles share interior area (edges touching is not enough)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}
