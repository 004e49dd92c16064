//! Plain copies of the observable game state, for rendering and JSON output.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::game::SessionState;
use crate::types::{PaletteColor, Size};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub index: usize,
    pub velocity: f32,
    pub color: PaletteColor,
    pub position: f32,
    pub clicked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub session: u32,
    pub state: SessionState,
    pub size: Size,
    pub elapsed_nanos: u64,
    pub score: u32,
    pub num_blocks: usize,
    pub started: bool,
    pub paused: bool,
    pub finished: bool,
    pub pieces: Vec<PieceSnapshot>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            session: 0,
            state: SessionState::NotStarted,
            size: Size::default(),
            elapsed_nanos: 0,
            score: 0,
            num_blocks: 0,
            started: false,
            paused: false,
            finished: false,
            pieces: Vec::new(),
        }
    }
}

impl GameSnapshot {
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_nanos / 1_000_000
    }

    /// Hash of everything a static (not running) frame shows.
    ///
    /// Elapsed time is left out: it only moves while the game is running.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.session.hash(&mut h);
        self.state.hash(&mut h);
        self.size.width.to_bits().hash(&mut h);
        self.size.height.to_bits().hash(&mut h);
        self.score.hash(&mut h);
        self.num_blocks.hash(&mut h);
        for p in &self.pieces {
            p.position.to_bits().hash(&mut h);
            p.clicked.hash(&mut h);
        }
        h.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameSnapshot {
        GameSnapshot {
            session: 2,
            state: SessionState::Paused,
            size: Size::new(320.0, 480.0),
            elapsed_nanos: 1_500_000_000,
            score: 11,
            num_blocks: 2,
            started: true,
            paused: true,
            finished: false,
            pieces: vec![
                PieceSnapshot {
                    index: 0,
                    velocity: 5.0,
                    color: PaletteColor::Red,
                    position: 12.0,
                    clicked: true,
                },
                PieceSnapshot {
                    index: 1,
                    velocity: 6.5,
                    color: PaletteColor::Blue,
                    position: 80.5,
                    clicked: false,
                },
            ],
        }
    }

    #[test]
    fn fingerprint_ignores_elapsed_time() {
        let a = sample();
        let mut b = sample();
        b.elapsed_nanos += 9_000_000;
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_tracks_clicks_and_state() {
        let a = sample();
        let mut b = sample();
        b.pieces[1].clicked = true;
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = sample();
        c.state = SessionState::Running;
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn serializes_with_lowercase_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["state"], "paused");
        assert_eq!(json["pieces"][1]["color"], "blue");
        assert_eq!(json["size"]["height"], 480.0);
    }
}
