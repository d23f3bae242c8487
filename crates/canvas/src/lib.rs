//! Drawing canvas for Brush.
//!
//! Holds the action log, turns pointer input into strokes, and replays the
//! log onto the screen.

mod action_log;
mod canvas;
mod element;
mod pointer;
mod render;
mod tool;

pub use action_log::ActionLog;
pub use canvas::{Canvas, CanvasEvent};
pub use element::CanvasElement;
pub use pointer::{PointerMachine, PointerState};
pub use render::{render_commands, DrawCommand};
pub use tool::{Pen, Tool, ToolSettings};
