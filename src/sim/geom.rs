//! Small geometry helpers shared by the collision and destruction passes
//!
//! Screen space: x grows to the right, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Point on (or in) the rectangle nearest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// Inclusive point-in-circle test
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance(center) <= radius
}

/// Inclusive point-in-rectangle test (edges count as inside)
#[inline]
pub fn point_in_rect(p: Vec2, rect: &Rect) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

/// Distance from `p` to the nearest point of `rect` (0 when inside)
#[inline]
pub fn clamped_distance(p: Vec2, rect: &Rect) -> f32 {
    p.distance(rect.closest_point(p))
}

/// True when a circle touches or overlaps a rectangle
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    clamped_distance(center, rect) <= radius
}
