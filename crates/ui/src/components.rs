//! Basic UI components.

use gpui::{
    div, prelude::*, px, Div, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement,
    SharedString, Stateful, Styled,
};
use theme::Theme;

/// Horizontal stack layout.
pub fn h_stack() -> Div {
    div().flex().flex_row().items_center()
}

/// Vertical stack layout.
pub fn v_stack() -> Div {
    div().flex().flex_col()
}

/// A panel container with background and border.
pub fn panel(theme: &Theme) -> Div {
    div()
        .bg(theme.ui_background)
        .border_1()
        .border_color(theme.ui_border)
        .rounded(px(8.0))
        .p(px(8.0))
}

/// Small muted heading above a group of controls.
pub fn section_label(label: impl Into<SharedString>, theme: &Theme) -> Div {
    div()
        .text_xs()
        .text_color(theme.ui_text_muted)
        .child(label.into())
}

/// A text button. `active` highlights it as the current choice.
pub fn button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    active: bool,
    theme: &Theme,
) -> Stateful<Div> {
    let (bg, border, text) = if active {
        (theme.selection.alpha(0.2), theme.selection, theme.selection)
    } else {
        (theme.ui_background, theme.ui_border, theme.ui_text)
    };
    let hover_bg = theme.hover;

    div()
        .id(id)
        .px(px(12.0))
        .py(px(6.0))
        .bg(bg)
        .border_1()
        .border_color(border)
        .rounded(px(4.0))
        .text_color(text)
        .text_sm()
        .cursor_pointer()
        .when(!active, |d| d.hover(move |d| d.bg(hover_bg)))
        .child(label.into())
}

/// A filled square showing a color.
pub fn swatch(color: Hsla, theme: &Theme) -> Div {
    div()
        .size(px(14.0))
        .rounded(px(3.0))
        .border_1()
        .border_color(theme.ui_border)
        .bg(color)
}
