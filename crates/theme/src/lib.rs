//! Minimal theming for Brush.
//!
//! Provides colors for the canvas surface and the surrounding controls.

use gpui::Hsla;

/// Which built-in theme to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// Theme colors for the drawing window.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Canvas background. The eraser paints with this color.
    pub canvas_background: Hsla,

    /// Active tool / selected option highlight
    pub selection: Hsla,

    /// Hover color for controls
    pub hover: Hsla,

    /// Tint applied to the shape preview while dragging
    pub preview_alpha: f32,

    /// UI background
    pub ui_background: Hsla,

    /// UI border
    pub ui_border: Hsla,

    /// UI text
    pub ui_text: Hsla,

    /// UI text muted
    pub ui_text_muted: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn new(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            canvas_background: gpui::white(),
            selection: hsla(0.58, 0.9, 0.5, 1.0), // Blue
            hover: hsla(0.0, 0.0, 0.93, 1.0),
            preview_alpha: 0.5,
            ui_background: hsla(0.0, 0.0, 0.98, 1.0),
            ui_border: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text: hsla(0.0, 0.0, 0.1, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
        }
    }

    /// Dark chrome. The canvas itself stays white so the ink colors read the same.
    pub fn dark() -> Self {
        Self {
            canvas_background: gpui::white(),
            selection: hsla(0.58, 0.9, 0.5, 1.0),
            hover: hsla(0.0, 0.0, 0.2, 1.0),
            preview_alpha: 0.5,
            ui_background: hsla(0.0, 0.0, 0.12, 1.0),
            ui_border: hsla(0.0, 0.0, 0.2, 1.0),
            ui_text: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
        }
    }
}

/// Helper to create Hsla from h, s, l, a values.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla { h, s, l, a }
}
