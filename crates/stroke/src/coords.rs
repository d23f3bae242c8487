//! Typed coordinates for the drawing surface.
//!
//! The canvas has no zoom or pan, so canvas space is pixels relative to the
//! canvas element's top-left corner. Keeping points and deltas as distinct
//! types still stops positions and offsets from being mixed up.

use glam::Vec2;
use serde::Serialize;
use std::ops::{Add, Sub};

/// Position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CanvasPoint(pub Vec2);

/// Movement/offset on the canvas (not a position).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CanvasDelta(pub Vec2);

/// Axis-aligned box with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CanvasRect {
    pub origin: CanvasPoint,
    pub size: Vec2,
}

// === CanvasPoint ===

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn distance(&self, other: CanvasPoint) -> f32 {
        self.0.distance(other.0)
    }
}

impl Add<CanvasDelta> for CanvasPoint {
    type Output = CanvasPoint;

    fn add(self, delta: CanvasDelta) -> Self::Output {
        CanvasPoint(self.0 + delta.0)
    }
}

impl Sub for CanvasPoint {
    type Output = CanvasDelta;

    /// Subtracting two points gives a delta.
    fn sub(self, other: CanvasPoint) -> Self::Output {
        CanvasDelta(self.0 - other.0)
    }
}

// === CanvasDelta ===

impl CanvasDelta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self(Vec2::new(dx, dy))
    }

    pub fn dx(&self) -> f32 {
        self.0.x
    }

    pub fn dy(&self) -> f32 {
        self.0.y
    }

    pub fn length(&self) -> f32 {
        self.0.length()
    }

    pub fn scale(&self, factor: f32) -> CanvasDelta {
        CanvasDelta(self.0 * factor)
    }
}

// === CanvasRect ===

impl CanvasRect {
    /// The box spanned by two corners, in any order.
    ///
    /// Reversed drags normalize to the same box:
    /// `(min(x0,x1), min(y0,y1), |x1-x0|, |y1-y0|)`.
    pub fn from_corners(a: CanvasPoint, b: CanvasPoint) -> Self {
        Self {
            origin: CanvasPoint(a.0.min(b.0)),
            size: (b.0 - a.0).abs(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn max(&self) -> CanvasPoint {
        CanvasPoint(self.origin.0 + self.size)
    }

    pub fn center(&self) -> CanvasPoint {
        CanvasPoint(self.origin.0 + self.size / 2.0)
    }
}
