//! Choice source: the only place randomness enters example generation.
//!
//! Every draw is a bounded choice that gets recorded. A failing example is
//! therefore fully described by its choice buffer, which the shrinker edits
//! and replays.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Derives the seed of one test case from the run seed and the case index.
///
/// Uses the splitmix64 finaliser so neighbouring cases get unrelated streams.
pub fn case_seed(run_seed: u64, case: u64) -> u64 {
    let mut z = run_seed ^ case.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

enum Mode {
    Random(Xoshiro256PlusPlus),
    Replay { prefix: Vec<u64>, pos: usize },
}

/// A recorded stream of bounded choices.
pub struct Source {
    mode: Mode,
    record: Vec<u64>,
}

impl Source {
    /// Fresh pseudo-random source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            mode: Mode::Random(Xoshiro256PlusPlus::seed_from_u64(seed)),
            record: Vec::new(),
        }
    }

    /// Replays `choices`; once they run out every draw returns `0`.
    pub fn replay(choices: Vec<u64>) -> Self {
        Self {
            mode: Mode::Replay {
                prefix: choices,
                pos: 0,
            },
            record: Vec::new(),
        }
    }

    /// Draws a choice in `0..=max`.
    ///
    /// Replayed values above `max` are folded back into range, so any buffer
    /// is a valid input for any strategy.
    pub fn draw_upto(&mut self, max: u64) -> u64 {
        let value = match &mut self.mode {
            Mode::Random(rng) => rng.gen_range(0..=max),
            Mode::Replay { prefix, pos } => {
                let raw = prefix.get(*pos).copied().unwrap_or(0);
                *pos += 1;
                if raw <= max {
                    raw
                } else {
                    raw % (max + 1)
                }
            }
        };
        self.record.push(value);
        value
    }

    /// Like [`Source::draw_upto`], but a random source records `forced`
    /// instead of drawing. Replay reads the buffer as usual, which lets the
    /// shrinker move away from the forced value.
    pub fn draw_forced(&mut self, max: u64, forced: u64) -> u64 {
        match self.mode {
            Mode::Random(_) => {
                let value = forced.min(max);
                self.record.push(value);
                value
            }
            Mode::Replay { .. } => self.draw_upto(max),
        }
    }

    /// Draws a full-width choice.
    pub fn draw_u64(&mut self) -> u64 {
        self.draw_upto(u64::MAX)
    }

    /// Choices drawn so far.
    pub fn choices(&self) -> &[u64] {
        &self.record
    }

    pub fn into_choices(self) -> Vec<u64> {
        self.record
    }
}
