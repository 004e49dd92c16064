//! Piece module - one falling piece's physics and click state
//!
//! A piece only ever reads two facts about the game that owns it: the current
//! play-area height (for wrap-around) and whether the game is paused (to
//! refuse clicks). Both are passed in by the caller, so a piece never holds a
//! link back to its [`Game`](crate::Game).

use crate::types::{PaletteColor, FALL_SPEED_DIVISOR};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceData {
    velocity: f32,
    color: PaletteColor,
    /// Vertical offset from the top of the play area.
    pub position: f32,
    clicked: bool,
}

impl PieceData {
    /// Create an unclicked piece.
    pub fn new(velocity: f32, color: PaletteColor, position: f32) -> Self {
        debug_assert!(velocity > 0.0, "piece velocity must be positive");
        Self {
            velocity,
            color,
            position,
            clicked: false,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Points this piece is worth (velocity truncated toward zero).
    pub fn points(&self) -> u32 {
        self.velocity as u32
    }

    /// Advance the piece by `dt_nanos`.
    ///
    /// Clicked pieces are frozen. A piece that is at or below `height` when
    /// the tick starts goes back to the top instead of moving.
    pub fn update(&mut self, dt_nanos: u64, height: f32) {
        if self.clicked {
            return;
        }
        let delta = (dt_nanos as f64 / FALL_SPEED_DIVISOR * self.velocity as f64) as f32;
        self.position = if self.position < height {
            self.position + delta
        } else {
            0.0
        };
    }

    /// Mark the piece as clicked.
    ///
    /// Returns `true` only for the first accepted click; already-clicked
    /// pieces and clicks while `paused` are refused. The caller owns the
    /// scoring side of the click.
    pub fn click(&mut self, paused: bool) -> bool {
        if self.clicked || paused {
            return false;
        }
        self.clicked = true;
        true
    }
}
