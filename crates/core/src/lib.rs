//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the falling-balls rules: pieces that fall at their own
//! speed, wrap back to the top when they leave the play area, and score their
//! (truncated) velocity when clicked. A session finishes once every piece has
//! been caught.
//!
//! It has **no dependency** on rendering, input devices or an event loop:
//!
//! - **Deterministic**: same seed and same timestamps give the same session
//! - **Host-driven**: the host pumps frames and clicks; the core never loops
//! - **Clock-injected**: `start()` and `toggle_pause()` read a [`Clock`]
//!
//! # Module Structure
//!
//! - [`game`]: session lifecycle, score, and the per-frame update
//! - [`piece`]: per-piece fall integration, wrap-around, and click state
//! - [`clock`]: wall-clock and hand-driven timelines
//! - [`rng`]: seedable LCG for spawn positions
//! - [`snapshot`]: serializable copy of observable state
//! - [`error`]: configuration errors
//!
//! # Example
//!
//! ```
//! use falling_balls_core::{ClickOutcome, Game, ManualClock};
//! use falling_balls_types::Size;
//!
//! let clock = ManualClock::new(0);
//! let mut game = Game::with_clock(42, clock.clone());
//! game.set_num_blocks(3).unwrap();
//! game.set_size(Size::new(300.0, 600.0));
//! game.start();
//!
//! // One frame later
//! let now = clock.advance(16_666_667);
//! if game.is_running() {
//!     game.update(now);
//! }
//!
//! let id = game.piece_id(1).unwrap();
//! assert_eq!(game.click(id), ClickOutcome::Scored { points: 6, finished: false });
//! ```
//!
//! # Timing
//!
//! Positions advance by `dt / 1e8 * velocity` layout units per tick, `dt` in
//! nanoseconds. A non-increasing timestamp yields `dt = 0`.

pub mod clock;
pub mod error;
pub mod game;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use falling_balls_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{validate_num_blocks, ConfigError};
pub use game::{ClickOutcome, Game, SessionState};
pub use piece::PieceData;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
