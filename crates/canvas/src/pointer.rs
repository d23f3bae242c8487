use crate::tool::Pen;
use stroke::{CanvasPoint, Stroke, StrokeKind};

/// Where the pointer is in a press-drag-release cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    /// Button held. For freehand tools `anchor` follows the last sample.
    Dragging { anchor: CanvasPoint },
}

/// Turns pointer events into strokes.
///
/// The machine never touches the action log; callers append whatever
/// stroke a transition returns.
#[derive(Clone, Debug, Default)]
pub struct PointerMachine {
    state: PointerState,
}

impl PointerMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PointerState::Dragging { .. })
    }

    /// Press: anchor at `at` and start dragging.
    pub fn pointer_down(&mut self, at: CanvasPoint) {
        self.state = PointerState::Dragging { anchor: at };
    }

    /// Drag sample. Freehand tools emit a segment from the previous sample.
    pub fn pointer_drag(&mut self, at: CanvasPoint, pen: &Pen) -> Option<Stroke> {
        let PointerState::Dragging { anchor } = self.state else {
            return None;
        };
        if !pen.tool.is_freehand() || anchor == at {
            return None;
        }

        self.state = PointerState::Dragging { anchor: at };
        Some(build(StrokeKind::FreehandSegment, anchor, at, pen))
    }

    /// Release. Shape tools emit the shape spanning anchor and `at`.
    pub fn pointer_up(&mut self, at: CanvasPoint, pen: &Pen) -> Option<Stroke> {
        let PointerState::Dragging { anchor } = std::mem::take(&mut self.state) else {
            return None;
        };
        let kind = pen.tool.shape_kind()?;
        Some(build(kind, anchor, at, pen))
    }

    /// The shape a release at `at` would create, for drawing a live preview.
    pub fn preview(&self, at: CanvasPoint, pen: &Pen) -> Option<Stroke> {
        let PointerState::Dragging { anchor } = self.state else {
            return None;
        };
        let kind = pen.tool.shape_kind()?;
        Some(build(kind, anchor, at, pen))
    }

    /// Drop an in-progress drag without creating anything.
    pub fn cancel(&mut self) {
        self.state = PointerState::Idle;
    }
}

fn build(kind: StrokeKind, start: CanvasPoint, end: CanvasPoint, pen: &Pen) -> Stroke {
    Stroke::new(kind, start, end, pen.color, pen.width, pen.style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::{Tool, ToolSettings};
    use stroke::{NamedColor, StrokeStyle};

    fn pen(tool: Tool) -> Pen {
        ToolSettings::default().with_tool(tool).pen(gpui::white())
    }

    fn p(x: f32, y: f32) -> CanvasPoint {
        CanvasPoint::new(x, y)
    }

    #[test]
    fn test_shape_created_on_release() {
        let pen = pen(Tool::Rectangle);
        let mut machine = PointerMachine::new();

        machine.pointer_down(p(1.0, 2.0));
        assert_eq!(machine.state(), PointerState::Dragging { anchor: p(1.0, 2.0) });
        assert!(machine.pointer_drag(p(5.0, 5.0), &pen).is_none());

        let stroke = machine.pointer_up(p(10.0, 20.0), &pen).unwrap();
        assert_eq!(stroke.kind(), StrokeKind::Rectangle);
        assert_eq!(stroke.start(), p(1.0, 2.0));
        assert_eq!(stroke.end(), p(10.0, 20.0));
        assert_eq!(machine.state(), PointerState::Idle);
    }

    #[test]
    fn test_freehand_emits_one_segment_per_sample() {
        let pen = pen(Tool::Pencil);
        let mut machine = PointerMachine::new();
        let (p0, p1, p2) = (p(0.0, 0.0), p(3.0, 4.0), p(6.0, 1.0));

        machine.pointer_down(p0);
        let first = machine.pointer_drag(p1, &pen).unwrap();
        let second = machine.pointer_drag(p2, &pen).unwrap();
        assert!(machine.pointer_up(p2, &pen).is_none());

        assert_eq!(first.kind(), StrokeKind::FreehandSegment);
        assert_eq!((first.start(), first.end()), (p0, p1));
        assert_eq!((second.start(), second.end()), (p1, p2));
        assert_eq!(machine.state(), PointerState::Idle);
    }

    #[test]
    fn test_repeated_sample_is_ignored() {
        let pen = pen(Tool::Pencil);
        let mut machine = PointerMachine::new();
        machine.pointer_down(p(1.0, 1.0));
        assert!(machine.pointer_drag(p(1.0, 1.0), &pen).is_none());
    }

    #[test]
    fn test_events_while_idle_do_nothing() {
        let mut machine = PointerMachine::new();
        assert!(machine.pointer_drag(p(1.0, 1.0), &pen(Tool::Pencil)).is_none());
        assert!(machine.pointer_up(p(1.0, 1.0), &pen(Tool::Line)).is_none());
        assert_eq!(machine.state(), PointerState::Idle);
    }

    #[test]
    fn test_settings_are_read_at_construction() {
        let mut settings = ToolSettings::default().with_tool(Tool::Pencil);
        let mut machine = PointerMachine::new();
        machine.pointer_down(p(0.0, 0.0));

        let red = machine
            .pointer_drag(p(1.0, 0.0), &settings.with_color(NamedColor::Red).pen(gpui::white()))
            .unwrap();
        settings = settings
            .with_color(NamedColor::Blue)
            .with_width(9)
            .with_style(StrokeStyle::Dashed);
        let blue = machine.pointer_drag(p(2.0, 0.0), &settings.pen(gpui::white())).unwrap();

        assert_eq!(red.color(), NamedColor::Red.hsla());
        assert_eq!(red.width(), 5);
        assert_eq!(red.style(), StrokeStyle::Solid);
        assert_eq!(blue.color(), NamedColor::Blue.hsla());
        assert_eq!(blue.width(), 9);
        assert_eq!(blue.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_preview_matches_release() {
        let pen = pen(Tool::Oval);
        let mut machine = PointerMachine::new();
        assert!(machine.preview(p(3.0, 3.0), &pen).is_none());

        machine.pointer_down(p(0.0, 0.0));
        let preview = machine.preview(p(8.0, 4.0), &pen).unwrap();
        let created = machine.pointer_up(p(8.0, 4.0), &pen).unwrap();
        assert_eq!(preview.primitive(), created.primitive());
    }

    #[test]
    fn test_no_preview_for_freehand() {
        let mut machine = PointerMachine::new();
        machine.pointer_down(p(0.0, 0.0));
        assert!(machine.preview(p(1.0, 1.0), &pen(Tool::Eraser)).is_none());
    }

    #[test]
    fn test_cancel_drops_drag() {
        let pen = pen(Tool::Line);
        let mut machine = PointerMachine::new();
        machine.pointer_down(p(0.0, 0.0));
        machine.cancel();
        assert!(!machine.is_dragging());
        assert!(machine.pointer_up(p(5.0, 5.0), &pen).is_none());
    }
}
