//! Dropdown of the named ink colors.

use crate::components::{h_stack, section_label, swatch, v_stack};
use canvas::{Canvas, CanvasEvent};
use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window,
};
use stroke::NamedColor;
use strum::IntoEnumIterator;
use theme::Theme;

pub struct ColorPicker {
    canvas: Entity<Canvas>,
    theme: Theme,
    open: bool,
    _subscriptions: Vec<Subscription>,
}

impl ColorPicker {
    pub fn new(canvas: Entity<Canvas>, theme: Theme, cx: &mut Context<Self>) -> Self {
        let canvas_sub = cx.subscribe(&canvas, |_, _, _: &CanvasEvent, cx| cx.notify());
        Self {
            canvas,
            theme,
            open: false,
            _subscriptions: vec![canvas_sub],
        }
    }

    fn toggle(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.open = !self.open;
        cx.notify();
    }

    fn pick(&mut self, color: NamedColor, cx: &mut Context<Self>) {
        self.open = false;
        self.canvas.update(cx, |canvas, cx| canvas.set_color(color, cx));
        cx.notify();
    }
}

impl Render for ColorPicker {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selected = self.canvas.read(cx).settings().color;
        let theme = self.theme.clone();
        let hover_bg = theme.hover;

        let field = h_stack()
            .id("color-picker")
            .w(px(120.0))
            .gap(px(6.0))
            .px(px(8.0))
            .py(px(4.0))
            .border_1()
            .border_color(theme.ui_border)
            .rounded(px(4.0))
            .cursor_pointer()
            .hover(move |d| d.bg(hover_bg))
            .on_click(cx.listener(Self::toggle))
            .child(swatch(selected.hsla(), &theme))
            .child(div().flex_1().child(SharedString::from(selected.to_string())))
            .child(if self.open { "▴" } else { "▾" });

        let menu = self.open.then(|| {
            let items = NamedColor::iter().map(|color| {
                let id: SharedString = format!("color-{}", color).to_lowercase().into();
                h_stack()
                    .id(id)
                    .gap(px(6.0))
                    .px(px(8.0))
                    .py(px(4.0))
                    .cursor_pointer()
                    .when(color == selected, |d| d.bg(theme.selection.alpha(0.2)))
                    .hover(move |d| d.bg(hover_bg))
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.pick(color, cx);
                    }))
                    .child(swatch(color.hsla(), &theme))
                    .child(SharedString::from(color.to_string()))
            });

            v_stack()
                .w(px(120.0))
                .py(px(2.0))
                .bg(theme.ui_background)
                .border_1()
                .border_color(theme.ui_border)
                .rounded(px(4.0))
                .children(items)
        });

        v_stack()
            .gap(px(4.0))
            .child(section_label("Color", &theme))
            .child(field)
            .children(menu)
    }
}
