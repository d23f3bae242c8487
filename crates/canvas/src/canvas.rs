use crate::action_log::ActionLog;
use crate::pointer::PointerMachine;
use crate::tool::{Pen, Tool, ToolSettings};
use gpui::{Context, EventEmitter, FocusHandle, Focusable};
use stroke::{CanvasPoint, NamedColor, Stroke, StrokeId, StrokeStyle};
use theme::Theme;

/// Events emitted by the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    StrokeAdded(StrokeId),
    StrokeUndone(StrokeId),
    Cleared,
    SettingsChanged,
}

/// The canvas state.
pub struct Canvas {
    /// Everything drawn so far, in creation order.
    log: ActionLog,

    /// Selections from the toolbar and control panel.
    settings: ToolSettings,

    /// Press/drag/release tracking.
    pointer: PointerMachine,

    /// Last known pointer position while dragging, for the shape preview.
    cursor: Option<CanvasPoint>,

    /// Theme colors.
    pub theme: Theme,

    /// Focus handle for keyboard events.
    focus_handle: FocusHandle,
}

impl Canvas {
    pub fn new(theme: Theme, cx: &mut Context<Self>) -> Self {
        Self {
            log: ActionLog::new(),
            settings: ToolSettings::default(),
            pointer: PointerMachine::new(),
            cursor: None,
            theme,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn settings(&self) -> ToolSettings {
        self.settings
    }

    pub fn tool(&self) -> Tool {
        self.settings.tool
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    /// Snapshot of the current settings used to build the next stroke.
    pub fn pen(&self) -> Pen {
        self.settings.pen(self.theme.canvas_background)
    }

    /// Append a stroke to the log and redraw.
    pub fn add_stroke(&mut self, stroke: Stroke, cx: &mut Context<Self>) {
        let id = stroke.id();
        log::debug!(
            "stroke {} added: {} {:?} -> {:?}",
            id,
            stroke.kind(),
            stroke.start().0,
            stroke.end().0
        );
        self.log.append(stroke);
        cx.emit(CanvasEvent::StrokeAdded(id));
        cx.notify();
    }

    /// Remove the most recent stroke. Does nothing when the log is empty.
    pub fn undo(&mut self, cx: &mut Context<Self>) {
        if let Some(stroke) = self.log.undo_last() {
            log::debug!("stroke {} undone, {} left", stroke.id(), self.log.len());
            cx.emit(CanvasEvent::StrokeUndone(stroke.id()));
            cx.notify();
        }
    }

    /// Remove every stroke.
    pub fn clear(&mut self, cx: &mut Context<Self>) {
        let removed = self.log.clear();
        log::debug!("canvas cleared, {} strokes removed", removed);
        cx.emit(CanvasEvent::Cleared);
        cx.notify();
    }

    pub fn set_tool(&mut self, tool: Tool, cx: &mut Context<Self>) {
        if self.settings.tool != tool {
            log::debug!("tool: {}", tool);
            self.settings.tool = tool;
            self.settings_changed(cx);
        }
    }

    pub fn set_color(&mut self, color: NamedColor, cx: &mut Context<Self>) {
        if self.settings.color != color {
            log::debug!("color: {}", color);
            self.settings.color = color;
            self.settings_changed(cx);
        }
    }

    pub fn set_width(&mut self, width: u32, cx: &mut Context<Self>) {
        let before = self.settings.width();
        self.settings.set_width(width);
        if self.settings.width() != before {
            log::debug!("width: {}", self.settings.width());
            self.settings_changed(cx);
        }
    }

    pub fn set_style(&mut self, style: StrokeStyle, cx: &mut Context<Self>) {
        if self.settings.style != style {
            log::debug!("style: {}", style);
            self.settings.style = style;
            self.settings_changed(cx);
        }
    }

    fn settings_changed(&mut self, cx: &mut Context<Self>) {
        cx.emit(CanvasEvent::SettingsChanged);
        cx.notify();
    }

    /// Pointer pressed on the canvas.
    pub fn pointer_down(&mut self, at: CanvasPoint, cx: &mut Context<Self>) {
        self.pointer.pointer_down(at);
        self.cursor = Some(at);
        cx.notify();
    }

    /// Pointer moved with the button held.
    pub fn pointer_drag(&mut self, at: CanvasPoint, cx: &mut Context<Self>) {
        if !self.pointer.is_dragging() {
            return;
        }
        self.cursor = Some(at);
        let pen = self.pen();
        match self.pointer.pointer_drag(at, &pen) {
            Some(segment) => self.add_stroke(segment, cx),
            // Shape tools only move the preview.
            None => cx.notify(),
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, at: CanvasPoint, cx: &mut Context<Self>) {
        let pen = self.pen();
        let created = self.pointer.pointer_up(at, &pen);
        self.cursor = None;
        match created {
            Some(stroke) => self.add_stroke(stroke, cx),
            None => cx.notify(),
        }
    }

    /// Abandon the current drag, if any.
    pub fn cancel_drag(&mut self, cx: &mut Context<Self>) {
        if self.pointer.is_dragging() {
            self.pointer.cancel();
            self.cursor = None;
            cx.notify();
        }
    }

    /// The pending shape under the pointer while a shape tool is dragging.
    pub fn preview(&self) -> Option<Stroke> {
        let at = self.cursor?;
        self.pointer.preview(at, &self.pen())
    }

    /// The log as pretty JSON, for diagnostics.
    pub fn dump_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.log.as_slice())
    }
}

impl EventEmitter<CanvasEvent> for Canvas {}

impl Focusable for Canvas {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};
    use stroke::StrokeKind;

    fn p(x: f32, y: f32) -> CanvasPoint {
        CanvasPoint::new(x, y)
    }

    #[gpui::test]
    fn test_shape_tool_appends_on_release(cx: &mut TestAppContext) {
        let canvas = cx.new(|cx| Canvas::new(Theme::light(), cx));

        canvas.update(cx, |canvas, cx| {
            canvas.set_tool(Tool::Oval, cx);
            canvas.pointer_down(p(10.0, 10.0), cx);
            canvas.pointer_drag(p(20.0, 30.0), cx);
            assert!(canvas.log().is_empty());
            assert!(canvas.preview().is_some());
            canvas.pointer_up(p(40.0, 50.0), cx);
        });

        canvas.read_with(cx, |canvas, _| {
            assert_eq!(canvas.log().len(), 1);
            let oval = canvas.log().last().unwrap();
            assert_eq!(oval.kind(), StrokeKind::Oval);
            assert_eq!(oval.end(), p(40.0, 50.0));
            assert!(canvas.preview().is_none());
        });
    }

    #[gpui::test]
    fn test_pencil_appends_while_dragging(cx: &mut TestAppContext) {
        let canvas = cx.new(|cx| Canvas::new(Theme::light(), cx));

        canvas.update(cx, |canvas, cx| {
            canvas.set_tool(Tool::Pencil, cx);
            canvas.pointer_down(p(0.0, 0.0), cx);
            canvas.pointer_drag(p(1.0, 1.0), cx);
            canvas.pointer_drag(p(2.0, 3.0), cx);
            assert_eq!(canvas.log().len(), 2);
            canvas.pointer_up(p(2.0, 3.0), cx);
        });

        canvas.read_with(cx, |canvas, _| {
            let segments: Vec<_> = canvas.log().iter().map(|s| (s.start(), s.end())).collect();
            assert_eq!(segments, vec![(p(0.0, 0.0), p(1.0, 1.0)), (p(1.0, 1.0), p(2.0, 3.0))]);
        });
    }

    #[gpui::test]
    fn test_color_change_is_not_retroactive(cx: &mut TestAppContext) {
        let canvas = cx.new(|cx| Canvas::new(Theme::light(), cx));

        canvas.update(cx, |canvas, cx| {
            canvas.set_color(NamedColor::Green, cx);
            canvas.pointer_down(p(0.0, 0.0), cx);
            canvas.pointer_up(p(5.0, 5.0), cx);
            canvas.set_color(NamedColor::Red, cx);
        });

        canvas.read_with(cx, |canvas, _| {
            let commands = crate::render_commands(canvas.log());
            assert_eq!(commands[0].color, NamedColor::Green.hsla());
        });
    }

    #[gpui::test]
    fn test_eraser_draws_background(cx: &mut TestAppContext) {
        let theme = Theme::light();
        let background = theme.canvas_background;
        let canvas = cx.new(|cx| Canvas::new(theme, cx));

        canvas.update(cx, |canvas, cx| {
            canvas.set_color(NamedColor::Blue, cx);
            canvas.set_tool(Tool::Eraser, cx);
            canvas.pointer_down(p(0.0, 0.0), cx);
            canvas.pointer_drag(p(4.0, 0.0), cx);
            canvas.pointer_up(p(4.0, 0.0), cx);
        });

        canvas.read_with(cx, |canvas, _| {
            assert_eq!(canvas.log().len(), 1);
            assert_eq!(canvas.log().last().unwrap().color(), background);
        });
    }

    #[gpui::test]
    fn test_undo_and_clear(cx: &mut TestAppContext) {
        let canvas = cx.new(|cx| Canvas::new(Theme::light(), cx));

        canvas.update(cx, |canvas, cx| {
            for i in 0..3 {
                let x = i as f32;
                canvas.add_stroke(Stroke::line(p(x, 0.0), p(x, 9.0)), cx);
            }
            canvas.undo(cx);
            assert_eq!(canvas.log().len(), 2);
            canvas.clear(cx);
            assert!(canvas.log().is_empty());
            canvas.undo(cx);
            assert!(canvas.log().is_empty());
        });
    }

    #[gpui::test]
    fn test_cancel_drag_discards_shape(cx: &mut TestAppContext) {
        let canvas = cx.new(|cx| Canvas::new(Theme::light(), cx));

        canvas.update(cx, |canvas, cx| {
            canvas.pointer_down(p(0.0, 0.0), cx);
            canvas.cancel_drag(cx);
            canvas.pointer_up(p(10.0, 10.0), cx);
            assert!(canvas.log().is_empty());
            assert!(!canvas.is_dragging());
        });
    }

    #[gpui::test]
    fn test_dump_json_lists_strokes(cx: &mut TestAppContext) {
        let canvas = cx.new(|cx| Canvas::new(Theme::light(), cx));

        canvas.update(cx, |canvas, cx| {
            canvas.add_stroke(Stroke::line(p(0.0, 0.0), p(1.0, 1.0)), cx);
        });

        canvas.read_with(cx, |canvas, _| {
            let json: serde_json::Value =
                serde_json::from_str(&canvas.dump_json().unwrap()).unwrap();
            assert_eq!(json.as_array().map(Vec::len), Some(1));
            assert_eq!(json[0]["kind"], "Line");
        });
    }
}
