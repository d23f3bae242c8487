use gpui::Hsla;
use stroke::{clamp_width, NamedColor, StrokeKind, StrokeStyle, DEFAULT_WIDTH};
use strum_macros::{Display, EnumIter};

/// Current drawing mode.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Straight line from press to release
    #[default]
    Line,
    /// Rectangle outline spanning press and release
    Rectangle,
    /// Oval inscribed in the box spanning press and release
    Oval,
    /// Freehand ink, one segment per drag sample
    Pencil,
    /// Freehand strokes in the canvas background color
    Eraser,
}

impl Tool {
    /// Freehand tools append while dragging instead of on release.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }

    /// The stroke kind this tool creates on release, if any.
    pub fn shape_kind(self) -> Option<StrokeKind> {
        match self {
            Tool::Line => Some(StrokeKind::Line),
            Tool::Rectangle => Some(StrokeKind::Rectangle),
            Tool::Oval => Some(StrokeKind::Oval),
            Tool::Pencil | Tool::Eraser => None,
        }
    }
}

/// The user's current selections in the controls.
///
/// These are mutable UI state. Strokes never read them directly: a [`Pen`]
/// snapshot is taken when a stroke is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolSettings {
    pub tool: Tool,
    pub color: NamedColor,
    width: u32,
    pub style: StrokeStyle,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: NamedColor::default(),
            width: DEFAULT_WIDTH,
            style: StrokeStyle::default(),
        }
    }
}

impl ToolSettings {
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the width, clamped to the slider range.
    pub fn set_width(&mut self, width: u32) {
        self.width = clamp_width(width);
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tool = tool;
        self
    }

    pub fn with_color(mut self, color: NamedColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.set_width(width);
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Freeze the settings into the value used to build strokes.
    ///
    /// `background` is the canvas color, which the eraser draws with.
    pub fn pen(&self, background: Hsla) -> Pen {
        let color = match self.tool {
            Tool::Eraser => background,
            _ => self.color.hsla(),
        };
        Pen {
            tool: self.tool,
            color,
            width: self.width,
            style: self.style,
        }
    }
}

/// Immutable drawing configuration captured at stroke-construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub tool: Tool,
    pub color: Hsla,
    pub width: u32,
    pub style: StrokeStyle,
}
