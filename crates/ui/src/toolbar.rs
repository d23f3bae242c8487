//! Toolbar for picking the drawing tool and running canvas commands.

use crate::components::{button, h_stack};
use canvas::{Canvas, CanvasEvent, Tool};
use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window,
};
use strum::IntoEnumIterator;
use theme::Theme;

/// Tool buttons followed by the Clear and Undo commands.
pub struct Toolbar {
    canvas: Entity<Canvas>,
    theme: Theme,
    _subscriptions: Vec<Subscription>,
}

impl Toolbar {
    pub fn new(canvas: Entity<Canvas>, theme: Theme, cx: &mut Context<Self>) -> Self {
        let canvas_sub = cx.subscribe(&canvas, Self::on_canvas_changed);
        Self {
            canvas,
            theme,
            _subscriptions: vec![canvas_sub],
        }
    }

    fn on_canvas_changed(
        &mut self,
        _canvas: Entity<Canvas>,
        _event: &CanvasEvent,
        cx: &mut Context<Self>,
    ) {
        cx.notify();
    }
}

impl Render for Toolbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (current_tool, has_strokes) = {
            let canvas = self.canvas.read(cx);
            (canvas.tool(), !canvas.log().is_empty())
        };
        let theme = &self.theme;

        let tools = Tool::iter().map(|tool| {
            let canvas = self.canvas.clone();
            let id: SharedString = format!("tool-{}", tool).to_lowercase().into();
            button(id, tool.to_string(), tool == current_tool, theme)
                .on_click(move |_, _window, cx| {
                    canvas.update(cx, |canvas, cx| canvas.set_tool(tool, cx));
                })
        });

        let clear = {
            let canvas = self.canvas.clone();
            button("clear", "Clear", false, theme).on_click(move |_, _window, cx| {
                canvas.update(cx, |canvas, cx| canvas.clear(cx));
            })
        };

        let undo = {
            let canvas = self.canvas.clone();
            let muted = theme.ui_text_muted;
            button("undo", "Undo", false, theme)
                .when(!has_strokes, |d| d.text_color(muted))
                .on_click(move |_, _window, cx| {
                    canvas.update(cx, |canvas, cx| canvas.undo(cx));
                })
        };

        h_stack()
            .gap(px(4.0))
            .p(px(6.0))
            .children(tools)
            .child(div().w(px(1.0)).h(px(20.0)).mx(px(6.0)).bg(theme.ui_border))
            .child(clear)
            .child(undo)
    }
}
