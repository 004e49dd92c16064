//! Game module - session state for the falling-balls game
//!
//! [`Game`] owns the pieces, the session clock, the score and the lifecycle
//! flags. It never drives itself: the host calls [`Game::update`] once per
//! rendered frame while [`Game::is_running`] holds, and forwards clicks through
//! [`Game::click`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::error::{validate_num_blocks, ConfigError};
use crate::piece::PieceData;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Coarse session lifecycle, derived from the `started`/`paused`/`finished` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    Running,
    Paused,
    Finished,
}

/// What became of a click routed through [`Game::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The piece was caught.
    Scored { points: u32, finished: bool },
    /// The piece had already been caught this session.
    AlreadyClicked,
    /// Clicks are refused while paused.
    Paused,
    /// No session is running.
    NotStarted,
    /// The id belongs to another session or points past the last piece.
    Stale,
}

impl ClickOutcome {
    pub fn scored(&self) -> bool {
        matches!(self, ClickOutcome::Scored { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<C: Clock = MonotonicClock> {
    clock: C,
    rng: SimpleRng,
    size: Size,
    pieces: Vec<PieceData>,
    /// Timestamp of the last tick (or start/resume). `u64::MAX` before the first start.
    previous_nanos: u64,
    start_nanos: u64,
    elapsed_nanos: u64,
    score: u32,
    clicked_count: usize,
    started: bool,
    paused: bool,
    finished: bool,
    num_blocks: usize,
    /// Monotonic session id (increments on every start).
    session: u32,
}

impl Game<MonotonicClock> {
    /// Create a game on the wall clock with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_clock(seed, MonotonicClock::new())
    }
}

impl<C: Clock> Game<C> {
    /// Create a game reading "now" from `clock`
    pub fn with_clock(seed: u32, clock: C) -> Self {
        Self {
            clock,
            rng: SimpleRng::new(seed),
            size: Size::default(),
            pieces: Vec::with_capacity(MAX_NUM_BLOCKS),
            previous_nanos: u64::MAX,
            start_nanos: 0,
            elapsed_nanos: 0,
            score: 0,
            clicked_count: 0,
            started: false,
            paused: false,
            finished: false,
            num_blocks: DEFAULT_NUM_BLOCKS,
            session: 0,
        }
    }

    /// Current time on the game's timeline; frame timestamps should use it.
    pub fn now_nanos(&self) -> u64 {
        self.clock.now_nanos()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pieces(&self) -> &[PieceData] {
        &self.pieces
    }

    pub fn elapsed_nanos(&self) -> u64 {
        self.elapsed_nanos
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_nanos / 1_000_000
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn state(&self) -> SessionState {
        if !self.started {
            SessionState::NotStarted
        } else if self.finished {
            SessionState::Finished
        } else if self.paused {
            SessionState::Paused
        } else {
            SessionState::Running
        }
    }

    /// Whether the host should keep feeding frames to [`update`](Self::update).
    pub fn is_running(&self) -> bool {
        self.started && !self.paused && !self.finished
    }

    /// Id for the piece at `index` in the current session.
    pub fn piece_id(&self, index: usize) -> Option<PieceId> {
        (index < self.pieces.len()).then(|| PieceId::new(self.session, index))
    }

    /// Record the measured play area. Takes effect on the next tick.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Configure the piece count for the next session.
    pub fn set_num_blocks(&mut self, n: usize) -> Result<(), ConfigError> {
        if self.started {
            return Err(ConfigError::SessionActive);
        }
        self.num_blocks = validate_num_blocks(n)?;
        Ok(())
    }

    /// Nudge the piece count, clamped to the allowed range.
    ///
    /// Ignored while a session is running. Returns the resulting count.
    pub fn adjust_num_blocks(&mut self, delta: i32) -> usize {
        if !self.started {
            let next = self.num_blocks as i64 + delta as i64;
            self.num_blocks = next.clamp(MIN_NUM_BLOCKS as i64, MAX_NUM_BLOCKS as i64) as usize;
        }
        self.num_blocks
    }

    /// Start a new session, discarding any previous one
    pub fn start(&mut self) {
        let now = self.clock.now_nanos();
        self.previous_nanos = now;
        self.start_nanos = now;
        self.elapsed_nanos = 0;
        self.score = 0;
        self.clicked_count = 0;
        self.started = true;
        self.finished = false;
        self.paused = false;
        self.session = self.session.wrapping_add(1);

        self.pieces.clear();
        for index in 0..self.num_blocks {
            let position = self.rng.next_range_f32(0.0, SPAWN_POSITION_MAX);
            self.pieces.push(PieceData::new(
                velocity_for_index(index),
                PaletteColor::for_index(index),
                position,
            ));
        }

        debug!(
            session = self.session,
            num_blocks = self.num_blocks,
            "session started"
        );
    }

    /// End the session without finishing it. Pieces stay but are inert.
    ///
    /// The catch count goes with the session, so a later block-count change
    /// can never leave more catches than blocks.
    pub fn stop(&mut self) {
        if self.started {
            debug!(session = self.session, score = self.score, "session stopped");
        }
        self.started = false;
        self.paused = false;
        self.finished = false;
        self.clicked_count = 0;
    }

    /// Start/Stop button: stop a running session or start a new one.
    pub fn toggle_start(&mut self) {
        if self.started {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Pause or resume.
    ///
    /// The previous-tick timestamp is resynced so the paused interval is never
    /// charged as motion on the next [`update`](Self::update).
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.previous_nanos = self.clock.now_nanos();
        debug!(session = self.session, paused = self.paused, "pause toggled");
    }

    /// Advance the simulation to `timestamp_nanos`.
    ///
    /// A timestamp earlier than the previous one yields a zero delta. This
    /// does not check the session flags; gate calls on [`is_running`](Self::is_running).
    pub fn update(&mut self, timestamp_nanos: u64) {
        let dt = timestamp_nanos.saturating_sub(self.previous_nanos);
        self.previous_nanos = timestamp_nanos;
        self.elapsed_nanos = timestamp_nanos.saturating_sub(self.start_nanos);

        let height = self.size.height;
        for piece in &mut self.pieces {
            piece.update(dt, height);
        }
    }

    /// Route a click on `id` to its piece.
    pub fn click(&mut self, id: PieceId) -> ClickOutcome {
        if id.session != self.session || id.index >= self.pieces.len() {
            trace!(?id, session = self.session, "stale click ignored");
            return ClickOutcome::Stale;
        }
        if !self.started {
            return ClickOutcome::NotStarted;
        }
        if self.paused {
            return ClickOutcome::Paused;
        }
        if !self.pieces[id.index].click(self.paused) {
            return ClickOutcome::AlreadyClicked;
        }

        let points = self.clicked(id.index);
        ClickOutcome::Scored {
            points,
            finished: self.finished,
        }
    }

    /// Apply a host action.
    ///
    /// Clicks address the current session. Returns the click outcome for
    /// [`GameAction::Click`], `None` otherwise.
    pub fn apply_action(&mut self, action: GameAction) -> Option<ClickOutcome> {
        match action {
            GameAction::StartStop => self.toggle_start(),
            GameAction::TogglePause => {
                if self.started && !self.finished {
                    self.toggle_pause();
                }
            }
            GameAction::MoreBlocks => {
                self.adjust_num_blocks(1);
            }
            GameAction::FewerBlocks => {
                self.adjust_num_blocks(-1);
            }
            GameAction::Click(index) => {
                return Some(self.click(PieceId::new(self.session, index)));
            }
        }
        None
    }

    /// Score bookkeeping for a piece that just accepted its click.
    fn clicked(&mut self, index: usize) -> u32 {
        let points = self.pieces[index].points();
        self.score += points;
        self.clicked_count += 1;
        if self.clicked_count == self.num_blocks {
            self.finished = true;
            debug!(
                session = self.session,
                score = self.score,
                elapsed_ms = self.elapsed_millis(),
                "session finished"
            );
        }
        points
    }

    /// Copy all observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Copy all observable state into an existing snapshot, reusing its piece buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.session = self.session;
        out.state = self.state();
        out.size = self.size;
        out.elapsed_nanos = self.elapsed_nanos;
        out.score = self.score;
        out.num_blocks = self.num_blocks;
        out.started = self.started;
        out.paused = self.paused;
        out.finished = self.finished;
        out.pieces.clear();
        out.pieces
            .extend(self.pieces.iter().enumerate().map(|(index, p)| PieceSnapshot {
                index,
                velocity: p.velocity(),
                color: p.color(),
                position: p.position,
                clicked: p.clicked(),
            }));
    }
}
