//! Brush: a small paint program.
//!
//! Pick a tool, color, width and line style, then draw lines, rectangles,
//! ovals and freehand strokes. Undo removes the last stroke; Clear wipes the
//! canvas.

use anyhow::{Context as _, Result};
use canvas::{Canvas, CanvasElement, CanvasEvent, Tool};
use config::AppConfig;
use gpui::{
    actions, div, prelude::*, px, size, App, Application, Bounds, Entity, FocusHandle, Focusable,
    IntoElement, KeyBinding, Menu, MenuItem, ParentElement, Styled, Subscription, TitlebarOptions,
    Window, WindowBounds, WindowOptions,
};
use logger::BrushLogger;
use theme::Theme;
use ui::{h_stack, panel, v_stack, ColorPicker, StylePicker, Toolbar, WidthSlider};

mod config;
mod logger;

actions!(
    brush,
    [
        CancelDrag,
        ClearCanvas,
        EraserTool,
        LineTool,
        OvalTool,
        PencilTool,
        Quit,
        RectangleTool,
        Undo,
    ]
);

/// Main application component
struct Brush {
    canvas: Entity<Canvas>,
    toolbar: Entity<Toolbar>,
    color_picker: Entity<ColorPicker>,
    width_slider: Entity<WidthSlider>,
    style_picker: Entity<StylePicker>,
    focus_handle: FocusHandle,
    theme: Theme,
    debug_dump: bool,
    _subscriptions: Vec<Subscription>,
}

impl Brush {
    pub fn new(config: &AppConfig, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let theme = Theme::new(config.appearance);
        let focus_handle = cx.focus_handle();
        let canvas = cx.new(|cx| Canvas::new(theme.clone(), cx));
        let toolbar = cx.new(|cx| Toolbar::new(canvas.clone(), theme.clone(), cx));
        let color_picker = cx.new(|cx| ColorPicker::new(canvas.clone(), theme.clone(), cx));
        let width_slider = cx.new(|cx| WidthSlider::new(canvas.clone(), theme.clone(), cx));
        let style_picker = cx.new(|cx| StylePicker::new(canvas.clone(), theme.clone(), cx));

        let canvas_subscription = cx.subscribe(&canvas, Self::handle_canvas_event);

        Brush {
            canvas,
            toolbar,
            color_picker,
            width_slider,
            style_picker,
            focus_handle,
            theme,
            debug_dump: config.debug_dump,
            _subscriptions: vec![canvas_subscription],
        }
    }

    fn handle_canvas_event(
        &mut self,
        canvas: Entity<Canvas>,
        event: &CanvasEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            CanvasEvent::StrokeAdded(_) | CanvasEvent::StrokeUndone(_) | CanvasEvent::Cleared => {
                if self.debug_dump {
                    match canvas.read(cx).dump_json() {
                        Ok(json) => log::info!("strokes:\n{}", json),
                        Err(err) => log::warn!("failed to dump strokes: {}", err),
                    }
                }
            }
            CanvasEvent::SettingsChanged => {}
        }
        cx.notify();
    }

    fn set_tool(&mut self, tool: Tool, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.set_tool(tool, cx));
    }

    fn activate_line_tool(&mut self, _: &LineTool, _window: &mut Window, cx: &mut Context<Self>) {
        self.set_tool(Tool::Line, cx);
    }

    fn activate_rectangle_tool(
        &mut self,
        _: &RectangleTool,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.set_tool(Tool::Rectangle, cx);
    }

    fn activate_oval_tool(&mut self, _: &OvalTool, _window: &mut Window, cx: &mut Context<Self>) {
        self.set_tool(Tool::Oval, cx);
    }

    fn activate_pencil_tool(
        &mut self,
        _: &PencilTool,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.set_tool(Tool::Pencil, cx);
    }

    fn activate_eraser_tool(
        &mut self,
        _: &EraserTool,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.set_tool(Tool::Eraser, cx);
    }

    fn undo(&mut self, _: &Undo, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.undo(cx));
    }

    fn clear(&mut self, _: &ClearCanvas, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.clear(cx));
    }

    fn cancel_drag(&mut self, _: &CancelDrag, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.cancel_drag(cx));
    }
}

impl Render for Brush {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_stack()
            .id("Brush")
            .key_context("brush")
            .track_focus(&self.focus_handle)
            .size_full()
            .text_xs()
            .bg(self.theme.ui_background)
            .text_color(self.theme.ui_text)
            .on_action(cx.listener(Self::activate_line_tool))
            .on_action(cx.listener(Self::activate_rectangle_tool))
            .on_action(cx.listener(Self::activate_oval_tool))
            .on_action(cx.listener(Self::activate_pencil_tool))
            .on_action(cx.listener(Self::activate_eraser_tool))
            .on_action(cx.listener(Self::undo))
            .on_action(cx.listener(Self::clear))
            .on_action(cx.listener(Self::cancel_drag))
            // Top: tools and commands
            .child(
                div()
                    .border_b_1()
                    .border_color(self.theme.ui_border)
                    .child(self.toolbar.clone()),
            )
            .child(
                h_stack()
                    .flex_1()
                    .items_start()
                    .overflow_hidden()
                    // Left: color and width
                    .child(
                        div().p(px(8.0)).child(
                            panel(&self.theme)
                                .w(px(160.0))
                                .flex()
                                .flex_col()
                                .gap(px(12.0))
                                .child(self.color_picker.clone())
                                .child(self.width_slider.clone()),
                        ),
                    )
                    // Center: canvas (takes remaining space)
                    .child(
                        div()
                            .flex_1()
                            .h_full()
                            .child(CanvasElement::new(self.canvas.clone())),
                    ),
            )
            // Bottom: line style
            .child(
                div()
                    .p(px(8.0))
                    .border_t_1()
                    .border_color(self.theme.ui_border)
                    .child(self.style_picker.clone()),
            )
    }
}

impl Focusable for Brush {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

fn init_keymap(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("l", LineTool, None),
        KeyBinding::new("r", RectangleTool, None),
        KeyBinding::new("o", OvalTool, None),
        KeyBinding::new("p", PencilTool, None),
        KeyBinding::new("e", EraserTool, None),
        KeyBinding::new("escape", CancelDrag, None),
        KeyBinding::new("cmd-z", Undo, None),
        KeyBinding::new("ctrl-z", Undo, None),
        KeyBinding::new("cmd-backspace", ClearCanvas, None),
        KeyBinding::new("ctrl-backspace", ClearCanvas, None),
        KeyBinding::new("cmd-q", Quit, None),
    ]);
}

fn init_menus(cx: &mut App) {
    cx.set_menus(vec![
        Menu {
            name: "Brush".into(),
            items: vec![MenuItem::action("Quit", Quit)],
        },
        Menu {
            name: "Edit".into(),
            items: vec![
                MenuItem::action("Undo", Undo),
                MenuItem::action("Clear", ClearCanvas),
            ],
        },
        Menu {
            name: "Tools".into(),
            items: vec![
                MenuItem::action("Line (L)", LineTool),
                MenuItem::action("Rectangle (R)", RectangleTool),
                MenuItem::action("Oval (O)", OvalTool),
                MenuItem::action("Pencil (P)", PencilTool),
                MenuItem::action("Eraser (E)", EraserTool),
            ],
        },
    ]);
}

fn open_main_window(config: &AppConfig, cx: &mut App) -> Result<()> {
    let bounds = Bounds::centered(None, size(px(800.0), px(600.0)), cx);
    let window = cx
        .open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Brush".into()),
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| Brush::new(config, window, cx)),
        )
        .context("failed to open the main window")?;

    window
        .update(cx, |view, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        })
        .context("failed to focus the main window")?;

    Ok(())
}

fn run() -> Result<()> {
    let config = AppConfig::from_env().context("failed to read configuration")?;
    BrushLogger::init(config.log_level, config.log_file.as_deref())
        .context("failed to install logger")?;
    log::info!("starting Brush ({:?} theme)", config.appearance);

    Application::new().run(move |cx: &mut App| {
        cx.on_action(quit);
        init_menus(cx);
        init_keymap(cx);

        if let Err(err) = open_main_window(&config, cx) {
            log::error!("{:#}", err);
            cx.quit();
        }
    });

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("brush: {:#}", err);
        std::process::exit(1);
    }
}

fn quit(_: &Quit, cx: &mut App) {
    cx.quit();
}
