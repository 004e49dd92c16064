//! Shared types module - plain data structures and constants
//!
//! This module defines the fundamental types used by the engine and by any host
//! that drives it. Everything here is plain data, usable from the core, the
//! terminal view, and headless tooling alike.
//!
//! # Units
//!
//! Lengths are in *layout units* (the host decides how many units one screen
//! cell covers). Time is in nanoseconds, as delivered by a frame source.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_NUM_BLOCKS` | 5 | Pieces per session unless configured |
//! | `MIN_NUM_BLOCKS` | 1 | Smallest allowed session |
//! | `MAX_NUM_BLOCKS` | 20 | Largest allowed session |
//! | `SPAWN_POSITION_MAX` | 100.0 | Spawn offsets are drawn from `[0, 100)` |
//! | `FALL_SPEED_DIVISOR` | 1e8 | Nanoseconds per unit of velocity travel |
//! | `BASE_VELOCITY` | 5.0 | Velocity of piece 0 |
//! | `VELOCITY_STEP` | 1.5 | Velocity added per spawn index |
//!
//! # Examples
//!
//! ```
//! use falling_balls_types::{GameAction, PaletteColor, PALETTE};
//!
//! // The palette cycles by spawn index
//! assert_eq!(PaletteColor::for_index(0), PaletteColor::Red);
//! assert_eq!(PaletteColor::for_index(PALETTE.len()), PaletteColor::Red);
//!
//! // Actions log under their camelCase names
//! assert_eq!(GameAction::TogglePause.as_str(), "togglePause");
//! ```

use serde::{Deserialize, Serialize};

/// Pieces per session when nothing else is configured.
pub const DEFAULT_NUM_BLOCKS: usize = 5;

/// Smallest piece count a session may be configured with.
pub const MIN_NUM_BLOCKS: usize = 1;

/// Largest piece count a session may be configured with.
pub const MAX_NUM_BLOCKS: usize = 20;

/// Upper (exclusive) bound of a freshly spawned piece's vertical offset.
pub const SPAWN_POSITION_MAX: f32 = 100.0;

/// Divisor turning `dt` nanoseconds into velocity multiples.
///
/// A piece with velocity 5 travels 5 units per 100ms.
pub const FALL_SPEED_DIVISOR: f64 = 1e8;

/// Velocity of the first spawned piece.
pub const BASE_VELOCITY: f32 = 5.0;

/// Velocity added per spawn index.
pub const VELOCITY_STEP: f32 = 1.5;

/// One display frame at 60Hz, in nanoseconds.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Edge length of a piece, in layout units.
pub const PIECE_SIZE: f32 = 40.0;

/// Horizontal distance between neighbouring pieces, in layout units.
pub const PIECE_SPACING: f32 = PIECE_SIZE * 5.0 / 3.0;

/// Velocity assigned to the piece spawned at `index`.
///
/// # Examples
///
/// ```
/// use falling_balls_types::velocity_for_index;
///
/// assert_eq!(velocity_for_index(0), 5.0);
/// assert_eq!(velocity_for_index(1), 6.5);
/// assert_eq!(velocity_for_index(2), 8.0);
/// ```
pub fn velocity_for_index(index: usize) -> f32 {
    index as f32 * VELOCITY_STEP + BASE_VELOCITY
}

/// Play-area bounds in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The six piece colors
///
/// Pieces take `PALETTE[index % 6]` in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

/// Palette in spawn-cycle order.
pub const PALETTE: [PaletteColor; 6] = [
    PaletteColor::Red,
    PaletteColor::Blue,
    PaletteColor::Cyan,
    PaletteColor::Magenta,
    PaletteColor::Yellow,
    PaletteColor::Black,
];

impl PaletteColor {
    /// Color of the piece spawned at `index`.
    pub fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

/// Reference to one piece of one session.
///
/// Hosts that address pieces by index hold on to these; an id issued before a
/// restart no longer matches the game's current session and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub session: u32,
    pub index: usize,
}

impl PieceId {
    pub const fn new(session: u32, index: usize) -> Self {
        Self { session, index }
    }
}

/// Host-level actions
///
/// These are the controls of the game screen: a start/stop button,
/// a pause button, a block-count slider, and tapping a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a new session, or stop the running one
    StartStop,
    /// Pause or resume the running session
    TogglePause,
    /// One more piece for the next session
    MoreBlocks,
    /// One fewer piece for the next session
    FewerBlocks,
    /// Click the piece at this index of the current session
    Click(usize),
}

impl GameAction {
    /// camelCase name, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::StartStop => "startStop",
            GameAction::TogglePause => "togglePause",
            GameAction::MoreBlocks => "moreBlocks",
            GameAction::FewerBlocks => "fewerBlocks",
            GameAction::Click(_) => "click",
        }
    }
}
