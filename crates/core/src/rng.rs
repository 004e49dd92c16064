//! RNG module - seedable random source for spawn positions
//!
//! A small LCG keeps sessions reproducible: the same seed always spawns the
//! same pieces at the same offsets, which is what the tests and the headless
//! simulator rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, 1)`.
    ///
    /// Uses the top 24 bits, which is exactly the f32 mantissa width.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in `[lo, hi)`.
    pub fn next_range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        let v = lo + self.next_f32() * (hi - lo);
        // Rounding can land exactly on `hi` for wide ranges.
        if v < hi {
            v
        } else {
            lo
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
