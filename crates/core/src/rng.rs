//! RNG module - seedable randomness behind a single seam
//!
//! The engine draws every random number it needs (which empty cell to spawn
//! into, and whether the spawn doubles once or twice) through the
//! [`RandomSource`] trait. Production games run on [`SimpleRng`], a seeded
//! LCG, so the same seed replays the same game. Tests can swap in
//! [`ScriptedRng`] to force exact spawn positions and values.

/// Source of uniform random numbers for the engine
///
/// Object safe, so a game can own a `Box<dyn RandomSource>` without being
/// generic over the generator.
pub trait RandomSource: std::fmt::Debug {
    /// Generate a value in `[0, bound)`
    ///
    /// `bound` must be non-zero; callers guard the zero case before drawing.
    fn next_range(&mut self, bound: u32) -> u32;
}

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Get the current RNG state (for continuing a sequence elsewhere)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_range bound must be non-zero");
        self.next_u32() % bound
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed sequence of values, for deterministic tests
///
/// Each draw takes the next scripted value reduced modulo `bound`; the
/// sequence wraps around when exhausted. Script values below every bound
/// they will meet pass through unchanged, which makes spawn positions and
/// spawn values fully scriptable.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source from the given sequence
    ///
    /// Panics if the sequence is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted sequence must not be empty");
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_range(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_range bound must be non-zero");
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
