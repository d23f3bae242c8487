//! Controls surrounding the Brush canvas.

mod color_picker;
mod components;
mod style_picker;
mod toolbar;
mod width_slider;

pub use color_picker::ColorPicker;
pub use components::{button, h_stack, panel, section_label, swatch, v_stack};
pub use style_picker::{style_label, StylePicker};
pub use toolbar::Toolbar;
pub use width_slider::WidthSlider;
