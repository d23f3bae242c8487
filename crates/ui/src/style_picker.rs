//! Solid/dotted radio choice.

use crate::components::{h_stack, section_label, v_stack};
use canvas::{Canvas, CanvasEvent};
use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window,
};
use stroke::StrokeStyle;
use theme::Theme;

/// Label shown next to each radio button.
pub fn style_label(style: StrokeStyle) -> &'static str {
    match style {
        StrokeStyle::Solid => "Solid",
        StrokeStyle::Dashed => "Dotted",
    }
}

pub struct StylePicker {
    canvas: Entity<Canvas>,
    theme: Theme,
    _subscriptions: Vec<Subscription>,
}

impl StylePicker {
    pub fn new(canvas: Entity<Canvas>, theme: Theme, cx: &mut Context<Self>) -> Self {
        let canvas_sub = cx.subscribe(&canvas, |_, _, _: &CanvasEvent, cx| cx.notify());
        Self {
            canvas,
            theme,
            _subscriptions: vec![canvas_sub],
        }
    }
}

impl Render for StylePicker {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let current = self.canvas.read(cx).settings().style;
        let theme = &self.theme;

        let options = [StrokeStyle::Solid, StrokeStyle::Dashed].map(|style| {
            let canvas = self.canvas.clone();
            let selected = style == current;
            let id: SharedString = format!("style-{}", style_label(style)).to_lowercase().into();

            h_stack()
                .id(id)
                .gap(px(6.0))
                .cursor_pointer()
                .on_click(move |_, _window, cx| {
                    canvas.update(cx, |canvas, cx| canvas.set_style(style, cx));
                })
                .child(
                    div()
                        .size(px(12.0))
                        .rounded_full()
                        .border_1()
                        .border_color(if selected {
                            theme.selection
                        } else {
                            theme.ui_text_muted
                        })
                        .flex()
                        .items_center()
                        .justify_center()
                        .when(selected, |d| {
                            d.child(div().size(px(6.0)).rounded_full().bg(theme.selection))
                        }),
                )
                .child(style_label(style))
        });

        v_stack()
            .gap(px(4.0))
            .child(section_label("Style", theme))
            .child(h_stack().gap(px(12.0)).children(options))
    }
}
