//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Mouse
//! clicks need the rendered layout to resolve a piece, so they are handled by
//! the terminal view's hit test instead.

pub mod map;

pub use falling_balls_types as types;

pub use map::{handle_key_event, should_quit};
