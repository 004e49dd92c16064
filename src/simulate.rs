//! Headless runs: the engine on a hand-driven 60Hz clock, no terminal.

use anyhow::Result;
use tracing::{debug, info};

use crate::config::SimulateOptions;
use crate::core::{Game, GameSnapshot, ManualClock};
use crate::types::{Size, FRAME_NANOS};

/// Play one session for `opts.frames` frames and return the final state.
///
/// With `click_every = Some(k)`, piece 0, 1, 2, ... is caught on every k-th
/// frame. The run stops early once the session finishes.
pub fn run_headless(num_blocks: usize, seed: u32, opts: &SimulateOptions) -> Result<GameSnapshot> {
    let clock = ManualClock::new(0);
    let mut game = Game::with_clock(seed, clock.clone());
    game.set_num_blocks(num_blocks)?;
    game.set_size(Size::new(opts.width, opts.height));
    game.start();

    let mut next_catch = 0usize;
    for frame in 1..=opts.frames {
        let now = clock.advance(FRAME_NANOS);
        if game.is_running() {
            game.update(now);
        }

        if let Some(k) = opts.click_every {
            if frame % k == 0 {
                if let Some(id) = game.piece_id(next_catch) {
                    let outcome = game.click(id);
                    debug!(frame, index = next_catch, ?outcome, "catch");
                    next_catch += 1;
                }
            }
        }

        if game.finished() {
            break;
        }
    }

    info!(
        seed,
        score = game.score(),
        elapsed_ms = game.elapsed_millis(),
        finished = game.finished(),
        "headless run complete"
    );
    Ok(game.snapshot())
}
