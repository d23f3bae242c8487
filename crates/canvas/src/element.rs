use crate::canvas::Canvas;
use crate::render::{render_commands, DrawCommand};
use gpui::{
    point, px, size, App, Bounds, ContentMask, DispatchPhase, Element, ElementId, Entity, Hitbox,
    Hsla, IntoElement, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, PathBuilder,
    Pixels, Point, Style, Window,
};
use stroke::{CanvasPoint, Polyline};

/// A GPUI element that renders and handles interaction for a Canvas.
pub struct CanvasElement {
    canvas: Entity<Canvas>,
}

impl CanvasElement {
    pub fn new(canvas: Entity<Canvas>) -> Self {
        Self { canvas }
    }
}

impl IntoElement for CanvasElement {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

pub struct CanvasElementState {
    hitbox: Hitbox,
}

impl Element for CanvasElement {
    type RequestLayoutState = ();
    type PrepaintState = CanvasElementState;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static std::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (gpui::LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = gpui::relative(1.).into();
        style.size.height = gpui::relative(1.).into();
        let layout_id = window.request_layout(style, None, cx);
        (layout_id, ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        _cx: &mut App,
    ) -> Self::PrepaintState {
        let hitbox = window.insert_hitbox(bounds, gpui::HitboxBehavior::BlockMouse);
        CanvasElementState { hitbox }
    }

    fn paint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let canvas_entity = self.canvas.clone();

        let (background, commands) = {
            let canvas = self.canvas.read(cx);
            let mut commands = render_commands(canvas.log());
            if let Some(preview) = canvas.preview() {
                commands.push(
                    DrawCommand::from_stroke(&preview).with_alpha(canvas.theme.preview_alpha),
                );
            }
            (canvas.theme.canvas_background, commands)
        };

        window.paint_quad(gpui::fill(bounds, background));

        window.with_content_mask(Some(ContentMask { bounds }), |window| {
            for command in &commands {
                paint_command(command, bounds.origin, window);
            }
        });

        let hitbox = prepaint.hitbox.clone();

        // Mouse down
        window.on_mouse_event({
            let canvas = canvas_entity.clone();
            let hitbox = hitbox.clone();
            move |event: &MouseDownEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble
                    && event.button == MouseButton::Left
                    && hitbox.is_hovered(window)
                {
                    let at = to_canvas(event.position, bounds);
                    canvas.update(cx, |canvas, cx| canvas.pointer_down(at, cx));
                }
            }
        });

        // Mouse move. Drags keep tracking outside the canvas until release.
        window.on_mouse_event({
            let canvas = canvas_entity.clone();
            move |event: &MouseMoveEvent, phase, _window, cx| {
                if phase == DispatchPhase::Bubble && event.pressed_button == Some(MouseButton::Left)
                {
                    let at = to_canvas(event.position, bounds);
                    canvas.update(cx, |canvas, cx| {
                        if canvas.is_dragging() {
                            canvas.pointer_drag(at, cx);
                        }
                    });
                }
            }
        });

        // Mouse up
        window.on_mouse_event({
            let canvas = canvas_entity.clone();
            move |event: &MouseUpEvent, phase, _window, cx| {
                if phase == DispatchPhase::Bubble && event.button == MouseButton::Left {
                    let at = to_canvas(event.position, bounds);
                    canvas.update(cx, |canvas, cx| {
                        if canvas.is_dragging() {
                            canvas.pointer_up(at, cx);
                        }
                    });
                }
            }
        });
    }
}

/// Window position to canvas coordinates (canvas origin is the element's top-left).
fn to_canvas(position: Point<Pixels>, bounds: Bounds<Pixels>) -> CanvasPoint {
    let local_x: f32 = (position.x - bounds.origin.x).into();
    let local_y: f32 = (position.y - bounds.origin.y).into();
    CanvasPoint::new(local_x, local_y)
}

fn to_window(canvas_point: CanvasPoint, origin: Point<Pixels>) -> Point<Pixels> {
    point(origin.x + px(canvas_point.x()), origin.y + px(canvas_point.y()))
}

fn paint_command(command: &DrawCommand, origin: Point<Pixels>, window: &mut Window) {
    let round = command.round_caps();
    for polyline in &command.polylines {
        if let [only] = polyline.points.as_slice() {
            paint_dot(*only, command.color, command.width, round, origin, window);
            continue;
        }
        paint_polyline(polyline, command.color, command.width, origin, window);
        if round {
            // Round caps at both ends and round joins at every corner.
            for vertex in &polyline.points {
                paint_dot(*vertex, command.color, command.width, true, origin, window);
            }
        }
    }
}

fn paint_polyline(
    polyline: &Polyline,
    color: Hsla,
    width: f32,
    origin: Point<Pixels>,
    window: &mut Window,
) {
    let Some((first, rest)) = polyline.points.split_first() else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    let mut builder = PathBuilder::stroke(px(width));
    builder.move_to(to_window(*first, origin));
    for vertex in rest {
        builder.line_to(to_window(*vertex, origin));
    }

    match builder.build() {
        Ok(path) => window.paint_path(path, color),
        Err(err) => log::warn!("failed to build stroke path: {}", err),
    }
}

/// A disc, or a square when `round` is false, centered on `center`.
fn paint_dot(
    center: CanvasPoint,
    color: Hsla,
    diameter: f32,
    round: bool,
    origin: Point<Pixels>,
    window: &mut Window,
) {
    let radius = diameter / 2.0;
    let dot = Bounds {
        origin: to_window(CanvasPoint::new(center.x() - radius, center.y() - radius), origin),
        size: size(px(diameter), px(diameter)),
    };
    let corner = if round { radius } else { 0.0 };
    window.paint_quad(gpui::fill(dot, color).corner_radii(px(corner)));
}
