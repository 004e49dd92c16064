use falling_balls::core::{Game, GameSnapshot, ManualClock, PieceSnapshot, SessionState};
use falling_balls::term::{GameView, Viewport, UNITS_PER_COL, UNITS_PER_ROW};
use falling_balls::types::{PaletteColor, Size, PIECE_SPACING};

fn screen_text(fb: &falling_balls::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn running_snapshot(pieces: Vec<PieceSnapshot>) -> GameSnapshot {
    GameSnapshot {
        session: 1,
        state: SessionState::Running,
        num_blocks: pieces.len(),
        started: true,
        pieces,
        ..GameSnapshot::default()
    }
}

fn piece(index: usize, position: f32) -> PieceSnapshot {
    PieceSnapshot {
        index,
        velocity: 5.0 + index as f32 * 1.5,
        color: PaletteColor::for_index(index),
        position,
        clicked: false,
    }
}

#[test]
fn term_view_renders_header_and_border() {
    let game = Game::with_clock(1, ManualClock::new(0));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(40, 20));

    assert!(fb.row_text(0).starts_with("Catch balls!"));
    assert!(fb.row_text(1).starts_with("Score 0 Time 0 Blocks 5"));

    // Play area frame sits under the three header rows.
    assert_eq!(fb.get(0, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(39, 3).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 19).unwrap().ch, '└');
    assert_eq!(fb.get(39, 19).unwrap().ch, '┘');
    assert!(screen_text(&fb).contains("Press S to start"));
}

#[test]
fn term_view_measures_play_area_in_layout_units() {
    let view = GameView::default();
    let size = view.play_area_size(Viewport::new(40, 20));
    // Inner area: 38 columns by 15 rows.
    assert_eq!(size, Size::new(38.0 * UNITS_PER_COL, 15.0 * UNITS_PER_ROW));
}

#[test]
fn term_view_draws_pieces_at_their_position() {
    let snap = running_snapshot(vec![piece(0, 0.0), piece(1, 3.0 * UNITS_PER_ROW)]);
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));

    // Piece 0: top-left of the inner area, labelled '1' in its middle column.
    assert_eq!(fb.get(1, 4).unwrap().ch, '█');
    assert_eq!(fb.get(3, 4).unwrap().ch, '1');

    // Piece 1: shifted right by the spacing, three rows down.
    let col = 1 + (PIECE_SPACING / UNITS_PER_COL) as u16;
    assert_eq!(fb.get(col, 7).unwrap().ch, '█');
}

#[test]
fn term_view_shows_game_over_when_finished() {
    let mut snap = running_snapshot(vec![piece(0, 10.0)]);
    snap.state = SessionState::Finished;
    snap.finished = true;
    snap.score = 5;
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));

    assert!(fb.row_text(0).starts_with("Catch balls! Game over!"));
    assert!(fb.row_text(1).starts_with("Score 5"));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_shows_pause_overlay() {
    let mut snap = running_snapshot(vec![piece(0, 10.0)]);
    snap.state = SessionState::Paused;
    snap.paused = true;
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn term_view_hit_test_finds_piece_under_cursor() {
    let view = GameView::default();
    let vp = Viewport::new(40, 20);
    let snap = running_snapshot(vec![piece(0, 0.0), piece(1, 3.0 * UNITS_PER_ROW)]);

    assert_eq!(view.hit_test(&snap, vp, 1, 4), Some(0));
    assert_eq!(view.hit_test(&snap, vp, 5, 5), Some(0));
    let col = 1 + (PIECE_SPACING / UNITS_PER_COL) as u16;
    assert_eq!(view.hit_test(&snap, vp, col, 7), Some(1));

    // Empty background and header rows hit nothing.
    assert_eq!(view.hit_test(&snap, vp, 30, 15), None);
    assert_eq!(view.hit_test(&snap, vp, 1, 0), None);
}

#[test]
fn term_view_hit_test_ignores_idle_sessions() {
    let view = GameView::default();
    let mut snap = running_snapshot(vec![piece(0, 0.0)]);
    snap.started = false;
    snap.state = SessionState::NotStarted;
    assert_eq!(view.hit_test(&snap, Viewport::new(40, 20), 1, 4), None);
}

#[test]
fn term_view_click_through_hit_test_scores() {
    let clock = ManualClock::new(0);
    let mut game = Game::with_clock(5, clock);
    game.set_num_blocks(2).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(60, 30);
    game.set_size(view.play_area_size(vp));
    game.start();

    let snap = game.snapshot();
    let area = view.play_area(vp).unwrap();
    let rect = view.piece_rect(area, &snap.pieces[1]).unwrap();
    let index = view.hit_test(&snap, vp, rect.x, rect.y).unwrap();
    assert_eq!(index, 1);

    let id = game.piece_id(index).unwrap();
    assert!(game.click(id).scored());
    assert_eq!(game.score(), 6);
}
