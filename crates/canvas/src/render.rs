//! Replaying strokes as paint operations.
//!
//! Everything here is independent of the window so the output can be
//! inspected directly; [`crate::CanvasElement`] turns each command into
//! gpui paths.

use gpui::Hsla;
use stroke::{dash, extend_ends, outline, Polyline, Stroke, StrokeStyle};

/// How to paint one stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub color: Hsla,
    pub width: f32,
    pub style: StrokeStyle,
    /// Runs to stroke. Solid strokes have one; dashed strokes one per dash.
    /// A single-point run is a dot `width` across.
    pub polylines: Vec<Polyline>,
}

impl DrawCommand {
    pub fn from_stroke(stroke: &Stroke) -> Self {
        let width = stroke.width() as f32;
        let path = outline(&stroke.primitive());
        let polylines = if path.length() == 0.0 {
            // Press and release on the same spot still leaves a mark.
            path.first()
                .map(|point| vec![Polyline::new(vec![point])])
                .unwrap_or_default()
        } else {
            match stroke.style().dash_length() {
                Some(length) => dash(&path, length),
                None => vec![extend_ends(&path, width / 2.0)],
            }
        };

        Self {
            color: stroke.color(),
            width,
            style: stroke.style(),
            polylines,
        }
    }

    pub fn round_caps(&self) -> bool {
        self.style.round_caps()
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color = self.color.opacity(alpha);
        self
    }
}

/// One command per stroke, front to back.
pub fn render_commands<'a>(strokes: impl IntoIterator<Item = &'a Stroke>) -> Vec<DrawCommand> {
    strokes.into_iter().map(DrawCommand::from_stroke).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionLog;
    use stroke::{CanvasPoint, NamedColor, StrokeKind};

    fn rect(from: CanvasPoint, to: CanvasPoint, style: StrokeStyle) -> Stroke {
        Stroke::new(StrokeKind::Rectangle, from, to, gpui::black(), 3, style)
    }

    #[test]
    fn test_reversed_rectangle_renders_identically() {
        let a = CanvasPoint::new(0.0, 0.0);
        let b = CanvasPoint::new(10.0, 10.0);
        for style in [StrokeStyle::Solid, StrokeStyle::Dashed] {
            assert_eq!(
                DrawCommand::from_stroke(&rect(b, a, style)),
                DrawCommand::from_stroke(&rect(a, b, style)),
            );
        }
    }

    #[test]
    fn test_solid_stroke_is_one_polyline() {
        let command = DrawCommand::from_stroke(&rect(
            CanvasPoint::new(0.0, 0.0),
            CanvasPoint::new(10.0, 10.0),
            StrokeStyle::Solid,
        ));
        assert_eq!(command.polylines.len(), 1);
        assert_eq!(command.width, 3.0);
        assert!(!command.round_caps());
    }

    #[test]
    fn test_solid_line_gets_square_caps() {
        let line = Stroke::line(CanvasPoint::new(10.0, 10.0), CanvasPoint::new(30.0, 10.0))
            .with_width(6);
        let command = DrawCommand::from_stroke(&line);
        assert_eq!(
            command.polylines[0].points,
            vec![CanvasPoint::new(7.0, 10.0), CanvasPoint::new(33.0, 10.0)]
        );
    }

    #[test]
    fn test_zero_extent_shapes_paint_a_dot() {
        let at = CanvasPoint::new(12.0, 8.0);
        for kind in [StrokeKind::Line, StrokeKind::Rectangle, StrokeKind::Oval] {
            for style in [StrokeStyle::Solid, StrokeStyle::Dashed] {
                let stroke = Stroke::new(kind, at, at, gpui::black(), 10, style);
                let command = DrawCommand::from_stroke(&stroke);
                assert_eq!(
                    command.polylines,
                    vec![Polyline::new(vec![at])],
                    "{kind} {style}"
                );
                assert_eq!(command.width, 10.0);
            }
        }
    }

    #[test]
    fn test_dashed_stroke_is_split() {
        let line = Stroke::line(CanvasPoint::new(0.0, 0.0), CanvasPoint::new(90.0, 0.0))
            .with_style(StrokeStyle::Dashed);
        let command = DrawCommand::from_stroke(&line);
        assert_eq!(command.polylines.len(), 5);
        assert!(command.round_caps());
    }

    #[test]
    fn test_commands_follow_creation_order() {
        let mut log = ActionLog::new();
        let colors = [NamedColor::Yellow, NamedColor::Black, NamedColor::Green];
        for (i, color) in colors.iter().enumerate() {
            let x = i as f32 * 10.0;
            log.append(
                Stroke::line(CanvasPoint::new(x, 0.0), CanvasPoint::new(x, 10.0))
                    .with_color(color.hsla()),
            );
        }

        let painted: Vec<Hsla> = render_commands(&log).iter().map(|c| c.color).collect();
        let expected: Vec<Hsla> = colors.iter().map(|c| c.hsla()).collect();
        assert_eq!(painted, expected);
    }

    #[test]
    fn test_empty_log_renders_nothing() {
        assert!(render_commands(&ActionLog::new()).is_empty());
    }
}
