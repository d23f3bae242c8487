//! Stroke width slider.
//!
//! The track is split into one notch per width value; pressing a notch
//! selects it, and dragging on from that press selects each notch crossed.
//! A button already held when the pointer arrives (say, mid canvas stroke)
//! leaves the width alone.

use crate::components::{h_stack, section_label, v_stack};
use canvas::{Canvas, CanvasEvent};
use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, MouseButton, MouseDownEvent,
    MouseMoveEvent, ParentElement, Render, Styled, Subscription, Window,
};
use stroke::{MAX_WIDTH, MIN_WIDTH};
use theme::Theme;

const NOTCH_WIDTH: f32 = 6.0;

pub struct WidthSlider {
    canvas: Entity<Canvas>,
    theme: Theme,
    dragging: bool,
    _subscriptions: Vec<Subscription>,
}

impl WidthSlider {
    pub fn new(canvas: Entity<Canvas>, theme: Theme, cx: &mut Context<Self>) -> Self {
        let canvas_sub = cx.subscribe(&canvas, |_, _, _: &CanvasEvent, cx| cx.notify());
        Self {
            canvas,
            theme,
            dragging: false,
            _subscriptions: vec![canvas_sub],
        }
    }

    fn set_width(&mut self, width: u32, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.set_width(width, cx));
    }

    fn press(&mut self, width: u32, cx: &mut Context<Self>) {
        self.dragging = true;
        self.set_width(width, cx);
    }

    fn drag_over(&mut self, width: u32, button_held: bool, cx: &mut Context<Self>) {
        if !button_held {
            self.dragging = false;
        } else if self.dragging {
            self.set_width(width, cx);
        }
    }
}

impl Render for WidthSlider {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let width = self.canvas.read(cx).settings().width();
        let theme = &self.theme;

        let notches = (MIN_WIDTH..=MAX_WIDTH).map(|value| {
            let filled = value <= width;
            div()
                .w(px(NOTCH_WIDTH))
                .h(px(14.0))
                .flex()
                .items_center()
                .cursor_pointer()
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, _: &MouseDownEvent, _window, cx| {
                        this.press(value, cx);
                    }),
                )
                .on_mouse_move(cx.listener(move |this, event: &MouseMoveEvent, _window, cx| {
                    let held = event.pressed_button == Some(MouseButton::Left);
                    this.drag_over(value, held, cx);
                }))
                .child(
                    div()
                        .w_full()
                        .h(px(4.0))
                        .bg(if filled { theme.selection } else { theme.ui_border }),
                )
        });

        v_stack()
            .gap(px(4.0))
            .child(section_label(format!("Width: {}", width), theme))
            .child(h_stack().children(notches))
    }
}
