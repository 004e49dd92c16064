//! Terminal host rendering for the falling-balls game.
//!
//! Renders into a plain framebuffer (no widget toolkit) that is diffed and
//! flushed to the terminal. The view also owns the cell/layout-unit mapping,
//! which is what the host uses to measure the play area and to turn mouse
//! clicks into piece indices.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use falling_balls_core as core;
pub use falling_balls_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Rect, Viewport, UNITS_PER_COL, UNITS_PER_ROW};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
