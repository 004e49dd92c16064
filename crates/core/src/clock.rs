//! Clock module - where `start()` and `toggle_pause()` read "now" from.
//!
//! Frame timestamps handed to [`Game::update`](crate::Game::update) must come
//! from the same timeline as the game's clock, otherwise the first frame after
//! a start or resume would charge the gap between the two timelines as motion.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic nanosecond timeline.
pub trait Clock {
    fn now_nanos(&self) -> u64;
}

/// Wall-clock timeline anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&self) -> u64 {
        // u64 nanoseconds cover ~584 years of uptime.
        self.epoch.elapsed().as_nanos() as u64
    }
}

/// Hand-driven timeline.
///
/// Clones share the same counter, so a test (or the headless simulator) can
/// keep one handle and give the other to the game.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_nanos: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_nanos)),
        }
    }

    pub fn set(&self, nanos: u64) {
        self.now.set(nanos);
    }

    /// Move the clock forward and return the new time.
    pub fn advance(&self, nanos: u64) -> u64 {
        let next = self.now.get().saturating_add(nanos);
        self.now.set(next);
        next
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new(10);
        let b = a.clone();
        a.advance(5);
        assert_eq!(b.now_nanos(), 15);
        b.set(3);
        assert_eq!(a.now_nanos(), 3);
    }

    #[test]
    fn monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let t0 = clock.now_nanos();
        let t1 = clock.now_nanos();
        assert!(t1 >= t0);
    }
}
