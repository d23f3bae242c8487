use crate::coords::{CanvasPoint, CanvasRect};
use crate::StrokeId;
use gpui::Hsla;
use serde::Serialize;
use strum_macros::Display;

/// Thinnest stroke the width slider allows.
pub const MIN_WIDTH: u32 = 1;
/// Thickest stroke the width slider allows.
pub const MAX_WIDTH: u32 = 20;
/// Width selected when the application starts.
pub const DEFAULT_WIDTH: u32 = 5;
/// Length of each dash and of each gap in a dashed stroke.
pub const DASH_LENGTH: f32 = 9.0;

/// The kind of primitive a stroke draws.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize)]
pub enum StrokeKind {
    Line,
    Rectangle,
    Oval,
    /// One short line between two consecutive freehand samples.
    FreehandSegment,
}

/// Line pattern of a stroke.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl StrokeStyle {
    /// Dash length for this style, `None` for a continuous line.
    pub fn dash_length(self) -> Option<f32> {
        match self {
            StrokeStyle::Solid => None,
            StrokeStyle::Dashed => Some(DASH_LENGTH),
        }
    }

    /// Dashed lines are drawn with round caps and joins.
    pub fn round_caps(self) -> bool {
        self == StrokeStyle::Dashed
    }
}

/// Geometry a stroke resolves to before tessellation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Segment { from: CanvasPoint, to: CanvasPoint },
    Rect(CanvasRect),
    Ellipse(CanvasRect),
}

/// One drawn primitive.
///
/// Strokes are immutable once built: everything the renderer needs,
/// color included, is captured at construction time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    id: StrokeId,
    kind: StrokeKind,
    start: CanvasPoint,
    end: CanvasPoint,
    color: Hsla,
    width: u32,
    style: StrokeStyle,
}

impl Stroke {
    /// Build a stroke. `width` is clamped into `MIN_WIDTH..=MAX_WIDTH`.
    pub fn new(
        kind: StrokeKind,
        start: CanvasPoint,
        end: CanvasPoint,
        color: Hsla,
        width: u32,
        style: StrokeStyle,
    ) -> Self {
        Self {
            id: StrokeId::new(),
            kind,
            start,
            end,
            color,
            width: clamp_width(width),
            style,
        }
    }

    pub fn line(start: CanvasPoint, end: CanvasPoint) -> Self {
        Self::new(
            StrokeKind::Line,
            start,
            end,
            gpui::black(),
            DEFAULT_WIDTH,
            StrokeStyle::Solid,
        )
    }

    pub fn with_color(mut self, color: Hsla) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = clamp_width(width);
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    pub fn start(&self) -> CanvasPoint {
        self.start
    }

    pub fn end(&self) -> CanvasPoint {
        self.end
    }

    pub fn color(&self) -> Hsla {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Normalized box spanned by the start and end points.
    pub fn bounding_box(&self) -> CanvasRect {
        CanvasRect::from_corners(self.start, self.end)
    }

    pub fn primitive(&self) -> Primitive {
        match self.kind {
            StrokeKind::Line | StrokeKind::FreehandSegment => Primitive::Segment {
                from: self.start,
                to: self.end,
            },
            StrokeKind::Rectangle => Primitive::Rect(self.bounding_box()),
            StrokeKind::Oval => Primitive::Ellipse(self.bounding_box()),
        }
    }
}

pub fn clamp_width(width: u32) -> u32 {
    width.clamp(MIN_WIDTH, MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_clamped() {
        let a = CanvasPoint::new(0.0, 0.0);
        let b = CanvasPoint::new(1.0, 1.0);
        assert_eq!(Stroke::line(a, b).with_width(0).width(), MIN_WIDTH);
        assert_eq!(Stroke::line(a, b).with_width(99).width(), MAX_WIDTH);
        assert_eq!(Stroke::line(a, b).width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_reversed_rectangle_has_same_primitive() {
        let forward = Stroke::new(
            StrokeKind::Rectangle,
            CanvasPoint::new(0.0, 0.0),
            CanvasPoint::new(10.0, 10.0),
            gpui::black(),
            5,
            StrokeStyle::Solid,
        );
        let reversed = Stroke::new(
            StrokeKind::Rectangle,
            CanvasPoint::new(10.0, 10.0),
            CanvasPoint::new(0.0, 0.0),
            gpui::black(),
            5,
            StrokeStyle::Solid,
        );
        assert_eq!(forward.primitive(), reversed.primitive());
    }

    #[test]
    fn test_oval_uses_bounding_box() {
        let oval = Stroke::new(
            StrokeKind::Oval,
            CanvasPoint::new(30.0, 5.0),
            CanvasPoint::new(10.0, 25.0),
            gpui::black(),
            2,
            StrokeStyle::Dashed,
        );
        assert_eq!(
            oval.primitive(),
            Primitive::Ellipse(CanvasRect {
                origin: CanvasPoint::new(10.0, 5.0),
                size: glam::Vec2::new(20.0, 20.0),
            })
        );
    }

    #[test]
    fn test_freehand_segment_keeps_direction() {
        let from = CanvasPoint::new(4.0, 4.0);
        let to = CanvasPoint::new(1.0, 2.0);
        let segment = Stroke::new(
            StrokeKind::FreehandSegment,
            from,
            to,
            gpui::black(),
            1,
            StrokeStyle::Solid,
        );
        assert_eq!(segment.primitive(), Primitive::Segment { from, to });
    }

    #[test]
    fn test_dash_style() {
        assert_eq!(StrokeStyle::Solid.dash_length(), None);
        assert_eq!(StrokeStyle::Dashed.dash_length(), Some(DASH_LENGTH));
        assert!(StrokeStyle::Dashed.round_caps());
        assert!(!StrokeStyle::Solid.round_caps());
    }

    #[test]
    fn test_serializes_to_json() {
        let stroke = Stroke::line(CanvasPoint::new(1.0, 2.0), CanvasPoint::new(3.0, 4.0));
        let json = serde_json::to_value(&stroke).unwrap();
        assert_eq!(json["kind"], "Line");
        assert_eq!(json["style"], "Solid");
        assert_eq!(json["width"], DEFAULT_WIDTH);
    }
}
