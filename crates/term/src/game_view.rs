//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Besides drawing, it owns the mapping between
//! terminal cells and the engine's layout units, so it also measures the play
//! area for [`Game::set_size`](crate::core::Game::set_size) and resolves mouse
//! clicks to pieces.

use crate::core::{GameSnapshot, PieceSnapshot, SessionState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PaletteColor, Size, PIECE_SIZE, PIECE_SPACING};

/// Layout units covered by one terminal column.
pub const UNITS_PER_COL: f32 = 8.0;

/// Layout units covered by one terminal row.
///
/// Roughly twice `UNITS_PER_COL` to compensate for glyph aspect ratio.
pub const UNITS_PER_ROW: f32 = 16.0;

/// Title, status and hint lines above the play area.
const HEADER_ROWS: u16 = 3;

const TITLE: Rgb = Rgb::new(218, 120, 91);
const PLAY_BG: Rgb = Rgb::new(235, 235, 240);
const CLICKED: Rgb = Rgb::new(136, 136, 136);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Cell rectangle, half-open on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }
}

/// A lightweight terminal renderer for the falling-balls game.
pub struct GameView {
    /// Piece width in terminal columns.
    tile_w: u16,
    /// Piece height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(
            (PIECE_SIZE / UNITS_PER_COL) as u16,
            (PIECE_SIZE / UNITS_PER_ROW) as u16,
        )
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Inner play area (inside the border), if the viewport has room for one.
    pub fn play_area(&self, viewport: Viewport) -> Option<Rect> {
        if viewport.width < 3 || viewport.height < HEADER_ROWS + 3 {
            return None;
        }
        Some(Rect {
            x: 1,
            y: HEADER_ROWS + 1,
            w: viewport.width - 2,
            h: viewport.height - HEADER_ROWS - 2,
        })
    }

    /// Play-area bounds in layout units.
    pub fn play_area_size(&self, viewport: Viewport) -> Size {
        match self.play_area(viewport) {
            Some(area) => Size::new(
                area.w as f32 * UNITS_PER_COL,
                area.h as f32 * UNITS_PER_ROW,
            ),
            None => Size::default(),
        }
    }

    /// Cells covered by `piece`, clipped to `area`.
    pub fn piece_rect(&self, area: Rect, piece: &PieceSnapshot) -> Option<Rect> {
        let col = (piece.index as f32 * PIECE_SPACING / UNITS_PER_COL) as u32;
        let row = (piece.position.max(0.0) / UNITS_PER_ROW) as u32;
        if col >= area.w as u32 || row >= area.h as u32 {
            return None;
        }
        let x = area.x + col as u16;
        let y = area.y + row as u16;
        Some(Rect {
            x,
            y,
            w: self.tile_w.min(area.right() - x),
            h: self.tile_h.min(area.bottom() - y),
        })
    }

    /// Piece under the cell `(col, row)`, topmost (last drawn) first.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<usize> {
        if !snap.started {
            return None;
        }
        let area = self.play_area(viewport)?;
        snap.pieces
            .iter()
            .rev()
            .find(|p| {
                self.piece_rect(area, p)
                    .is_some_and(|r| r.contains(col, row))
            })
            .map(|p| p.index)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        self.draw_header(fb, snap);

        let Some(area) = self.play_area(viewport) else {
            return;
        };

        let border = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));
        self.draw_border(fb, area, border);
        fb.fill_rect(
            area.x,
            area.y,
            area.w,
            area.h,
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );

        if !snap.started {
            self.draw_overlay_text(fb, area, "Press S to start");
            return;
        }

        for piece in &snap.pieces {
            if let Some(rect) = self.piece_rect(area, piece) {
                self.draw_piece(fb, rect, piece);
            }
        }

        match snap.state {
            SessionState::Paused => self.draw_overlay_text(fb, area, "PAUSED"),
            SessionState::Finished => self.draw_overlay_text(fb, area, "GAME OVER"),
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let title = CellStyle::new(TITLE, Rgb::new(0, 0, 0)).bold();
        let label = CellStyle::default();
        let value = CellStyle::default().bold();
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let x = fb.put_str(0, 0, "Catch balls!", title);
        if snap.finished {
            fb.put_str(x, 0, " Game over!", title);
        }

        let mut x = fb.put_str(0, 1, "Score ", label);
        x = fb.put_u64(x, 1, snap.score as u64, value);
        x = fb.put_str(x, 1, " Time ", label);
        x = fb.put_u64(x, 1, snap.elapsed_millis(), value);
        x = fb.put_str(x, 1, " Blocks ", label);
        fb.put_u64(x, 1, snap.num_blocks as u64, value);

        let hints = match snap.state {
            SessionState::NotStarted => "[-/+] blocks  [s] start  [q] quit",
            SessionState::Running => "[s] stop  [p] pause  [click/1-0] catch  [q] quit",
            SessionState::Paused => "[s] stop  [p] resume  [q] quit",
            SessionState::Finished => "[s] stop  [q] quit",
        };
        fb.put_str(0, 2, hints, hint);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, area: Rect, style: CellStyle) {
        let left = area.x - 1;
        let top = area.y - 1;
        let right = area.right();
        let bottom = area.bottom();

        fb.put_char(left, top, '┌', style);
        fb.put_char(right, top, '┐', style);
        fb.put_char(left, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for x in area.x..right {
            fb.put_char(x, top, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in area.y..bottom {
            fb.put_char(left, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, rect: Rect, piece: &PieceSnapshot) {
        let fill = if piece.clicked {
            CLICKED
        } else {
            palette_rgb(piece.color)
        };
        fb.fill_rect(
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            '█',
            CellStyle::new(fill, PLAY_BG),
        );

        // Key hint for keyboard catching.
        if let Some(label) = key_label(piece.index) {
            let fg = if piece.color == PaletteColor::Black && !piece.clicked {
                Rgb::new(255, 255, 255)
            } else {
                Rgb::new(0, 0, 0)
            };
            fb.put_char(rect.x + rect.w / 2, rect.y, label, CellStyle::new(fg, fill).bold());
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, area: Rect, text: &str) {
        let mid_y = area.y + area.h / 2;
        let text_w = text.chars().count() as u16;
        let x = area.x + area.w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn palette_rgb(color: PaletteColor) -> Rgb {
    match color {
        PaletteColor::Red => Rgb::new(220, 50, 47),
        PaletteColor::Blue => Rgb::new(38, 99, 214),
        PaletteColor::Cyan => Rgb::new(0, 188, 212),
        PaletteColor::Magenta => Rgb::new(211, 54, 130),
        PaletteColor::Yellow => Rgb::new(240, 200, 0),
        PaletteColor::Black => Rgb::new(20, 20, 20),
    }
}

/// Digit key that catches the piece at `index` (`1`..`9`, then `0`).
fn key_label(index: usize) -> Option<char> {
    match index {
        0..=8 => char::from_digit(index as u32 + 1, 10),
        9 => Some('0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_labels_follow_number_row() {
        assert_eq!(key_label(0), Some('1'));
        assert_eq!(key_label(8), Some('9'));
        assert_eq!(key_label(9), Some('0'));
        assert_eq!(key_label(10), None);
    }

    #[test]
    fn default_tile_matches_piece_size() {
        let view = GameView::default();
        assert_eq!((view.tile_w, view.tile_h), (5, 2));
    }

    #[test]
    fn tiny_viewport_has_no_play_area() {
        let view = GameView::default();
        assert_eq!(view.play_area(Viewport::new(80, 5)), None);
        assert_eq!(view.play_area_size(Viewport::new(2, 40)), Size::default());
    }

    #[test]
    fn piece_rect_clips_at_bottom() {
        let view = GameView::default();
        let area = Rect {
            x: 1,
            y: 4,
            w: 20,
            h: 10,
        };
        let piece = PieceSnapshot {
            index: 0,
            velocity: 5.0,
            color: PaletteColor::Red,
            position: 9.5 * UNITS_PER_ROW,
            clicked: false,
        };
        let rect = view.piece_rect(area, &piece).unwrap();
        assert_eq!(rect.y, 13);
        assert_eq!(rect.h, 1);

        let below = PieceSnapshot {
            position: 10.0 * UNITS_PER_ROW,
            ..piece
        };
        assert_eq!(view.piece_rect(area, &below), None);
    }
}
