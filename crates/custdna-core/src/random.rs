//! Replaceable random sources
//!
//! Sentiment and escalation inference consume randomness at a few fixed
//! points. Everything goes through [`RandomSource`] so callers can pin the
//! outcome with a seed or a script of draws.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::warn;

/// Seed used when the operating system entropy source is unavailable
pub const FALLBACK_SEED: u64 = 0x5eed_d7a0;

/// Draw returned by a [`ScriptedRandom`] once its script runs out
pub const FALLBACK_DRAW: f64 = 0.5;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource: Send {
    /// Next uniform draw in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Bernoulli trial succeeding with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Uniform index into a collection of `len` elements
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.unit() * len as f64).floor() as usize;
        idx.min(len - 1)
    }

    /// Uniform integer in `lo..=hi`
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = (hi - lo) as usize + 1;
        lo + self.index(span) as u32
    }
}

/// `StdRng`-backed source
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from the operating system, falling back to [`FALLBACK_SEED`]
    pub fn from_entropy() -> Self {
        let rng = match StdRng::from_rng(OsRng) {
            Ok(rng) => rng,
            Err(e) => {
                warn!("OS entropy unavailable ({e}), using deterministic fallback seed");
                StdRng::seed_from_u64(FALLBACK_SEED)
            }
        };
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then yields [`FALLBACK_DRAW`] forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws taken so far, including fallback draws
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Draws still queued
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.consumed += 1;
        self.draws
            .pop_front()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .unwrap_or(FALLBACK_DRAW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scripted_random_replays_then_falls_back() {
        let mut rng = ScriptedRandom::new([0.1, 0.9]);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.unit(), 0.9);
        assert_eq!(rng.unit(), FALLBACK_DRAW);
        assert_eq!(rng.consumed(), 3);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_chance_is_strictly_less_than() {
        let mut rng = ScriptedRandom::new([0.4, 0.39]);
        assert!(!rng.chance(0.4));
        assert!(rng.chance(0.4));
    }

    #[test]
    fn test_int_inclusive_hits_both_ends() {
        let mut rng = ScriptedRandom::new([0.0, 0.999_999]);
        assert_eq!(rng.int_inclusive(5, 95), 5);
        assert_eq!(rng.int_inclusive(5, 95), 95);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = StdRandom::with_seed(7);
        let mut b = StdRandom::with_seed(7);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    proptest! {
        #[test]
        fn prop_index_in_bounds(seed in any::<u64>(), len in 1usize..64) {
            let mut rng = StdRandom::with_seed(seed);
            for _ in 0..32 {
                prop_assert!(rng.index(len) < len);
            }
        }

        #[test]
        fn prop_int_inclusive_in_range(draw in 0.0f64..1.0, lo in 0u32..50, width in 0u32..100) {
            let mut rng = ScriptedRandom::new([draw]);
            let value = rng.int_inclusive(lo, lo + width);
            prop_assert!(value >= lo && value <= lo + width);
        }
    }
}
