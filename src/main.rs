//! Falling Balls runner (default binary).
//!
//! `play` (the default) hosts the engine in the terminal: it measures the
//! play area, pumps one `update` per frame while the session is running, and
//! turns keys and mouse clicks into game actions. `simulate` runs headless and
//! prints the final snapshot as JSON.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};

use falling_balls::config::{Command, Config};
use falling_balls::core::{Game, GameSnapshot};
use falling_balls::input::{handle_key_event, should_quit};
use falling_balls::logging;
use falling_balls::simulate::run_headless;
use falling_balls::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use falling_balls::types::{PieceId, FRAME_NANOS};

/// Idle/paused/finished screens are refreshed at least this often.
const STATIC_REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env_and_args(&args)?;
    let seed = config.seed.unwrap_or_else(seed_from_time);

    match &config.command {
        Command::Simulate(opts) => {
            logging::init(config.log_path.as_deref(), true)?;
            let snap = run_headless(config.num_blocks, seed, opts)?;
            println!("{}", serde_json::to_string_pretty(&snap)?);
            Ok(())
        }
        Command::Play => {
            logging::init(config.log_path.as_deref(), false)?;
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config, seed);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let mut game = Game::new(seed);
    game.set_num_blocks(config.num_blocks)?;
    info!(seed, num_blocks = config.num_blocks, "terminal session ready");

    let view = GameView::default();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut viewport = terminal_viewport();

    let frame = Duration::from_nanos(FRAME_NANOS);
    let mut last_frame = Instant::now();

    loop {
        // Frame.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();

            viewport = terminal_viewport();
            game.set_size(view.play_area_size(viewport));
            if game.is_running() {
                game.update(game.now_nanos());
            }

            game.snapshot_into(&mut snap);
            let now_ms = game.now_nanos() / 1_000_000;
            if throttle.should_render(now_ms, snap.fingerprint(), !game.is_running()) {
                view.render_into(&snap, viewport, &mut fb);
                term.draw_swap(&mut fb)?;
            }
        }

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = game.score(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let outcome = game.apply_action(action);
                    debug!(action = action.as_str(), ?outcome, "key action");
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                // Resolve against what is on screen; a restart since then makes the id stale.
                if let Some(index) = view.hit_test(&snap, viewport, column, row) {
                    let outcome = game.click(PieceId::new(snap.session, index));
                    debug!(index, ?outcome, "mouse click");
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                throttle.reset();
            }
            _ => {}
        }
    }
}

fn terminal_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
