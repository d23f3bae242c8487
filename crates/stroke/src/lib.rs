//! Stroke model for Brush.
//!
//! A stroke is one immutable drawn primitive. This crate holds the stroke
//! record, its coordinates, the named ink colors, and the geometry that turns
//! a stroke into paintable polylines.

pub mod coords;
pub mod geometry;
mod color;
mod stroke;
mod stroke_id;

pub use color::NamedColor;
pub use coords::{CanvasDelta, CanvasPoint, CanvasRect};
pub use geometry::{dash, extend_ends, outline, Polyline};
pub use stroke::{
    clamp_width, Primitive, Stroke, StrokeKind, StrokeStyle, DASH_LENGTH, DEFAULT_WIDTH,
    MAX_WIDTH, MIN_WIDTH,
};
pub use stroke_id::StrokeId;
