//! Randomness source injected into ticks
//!
//! Every `rand::Rng` is a [`RandomSource`], so callers normally pass a
//! seeded `StdRng`. [`ScriptedSource`] replays fixed draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in the closed range `[low, high]`.
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;

    /// Uniform fraction in `[0, 1)`.
    fn next_fraction(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }

    fn next_fraction(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Build the process generator, from a fixed seed when one is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Deterministic source cycling through fixed integer and fraction scripts.
///
/// Integer draws are clamped into the requested range. An empty integer
/// script yields `low`; an empty fraction script yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    ints: Vec<i32>,
    fractions: Vec<f64>,
    next_int: usize,
    next_fraction: usize,
}

impl ScriptedSource {
    pub fn new(ints: impl Into<Vec<i32>>, fractions: impl Into<Vec<f64>>) -> Self {
        Self {
            ints: ints.into(),
            fractions: fractions.into(),
            next_int: 0,
            next_fraction: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        if self.ints.is_empty() {
            return low;
        }
        let value = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        value.max(low).min(high)
    }

    fn next_fraction(&mut self) -> f64 {
        if self.fractions.is_empty() {
            return 0.0;
        }
        let value = self.fractions[self.next_fraction % self.fractions.len()];
        self.next_fraction += 1;
        value
    }
}
