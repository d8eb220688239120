//! Choice-sequence shrinker.
//!
//! Works on the recorded choices rather than on values, so every candidate
//! is regenerated through the strategy and stays inside its domain. A
//! candidate is kept only if it still fails and the choices it consumed are
//! shortlex-smaller than the current best, which makes the search
//! deterministic and terminating.

use std::cmp::Ordering;

use tracing::trace;

use crate::runner::{execute, Outcome, TestCaseResult};
use crate::source::Source;
use crate::strategy::Strategy;

const CHUNK_SIZES: [usize; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

pub(crate) fn shortlex_less(a: &[u64], b: &[u64]) -> bool {
    match a.len().cmp(&b.len()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a < b,
    }
}

pub(crate) struct Shrinker<'a, S: ?Sized, F> {
    strategy: &'a S,
    test: &'a F,
    best: Vec<u64>,
    reason: String,
    steps: u32,
    max_steps: u32,
}

impl<'a, S, F> Shrinker<'a, S, F>
where
    S: Strategy + ?Sized,
    F: Fn(S::Value) -> TestCaseResult,
{
    pub(crate) fn new(
        strategy: &'a S,
        test: &'a F,
        choices: Vec<u64>,
        reason: String,
        max_steps: u32,
    ) -> Self {
        Self {
            strategy,
            test,
            best: choices,
            reason,
            steps: 0,
            max_steps,
        }
    }

    pub(crate) fn finish(self) -> (Vec<u64>, String, u32) {
        (self.best, self.reason, self.steps)
    }

    fn exhausted(&self) -> bool {
        self.steps >= self.max_steps
    }

    /// Repeats every pass until a full round makes no progress.
    pub(crate) fn run(&mut self) {
        loop {
            let before = self.best.clone();
            self.zero_all();
            self.delete_chunks();
            self.zero_chunks();
            self.minimize_choices();
            if self.best == before || self.exhausted() {
                break;
            }
        }
    }

    fn consider(&mut self, candidate: Vec<u64>) -> bool {
        if self.exhausted() || !shortlex_less(&candidate, &self.best) {
            return false;
        }
        self.steps += 1;
        let (outcome, consumed) = execute(self.strategy, self.test, Source::replay(candidate));
        match outcome {
            Outcome::Fail(reason) if shortlex_less(&consumed, &self.best) => {
                trace!(step = self.steps, len = consumed.len(), "shrink accepted");
                self.best = consumed;
                self.reason = reason;
                true
            }
            _ => false,
        }
    }

    fn zero_all(&mut self) {
        if self.best.iter().any(|c| *c != 0) {
            self.consider(vec![0; self.best.len()]);
        }
    }

    fn delete_chunks(&mut self) {
        for size in CHUNK_SIZES {
            let mut i = 0;
            while i + size <= self.best.len() && !self.exhausted() {
                let mut candidate = self.best.clone();
                candidate.drain(i..i + size);
                if !self.consider(candidate) {
                    i += 1;
                }
            }
        }
    }

    fn zero_chunks(&mut self) {
        for size in [8, 4, 2, 1] {
            let mut i = 0;
            while i + size <= self.best.len() && !self.exhausted() {
                if self.best[i..i + size].iter().any(|c| *c != 0) {
                    let mut candidate = self.best.clone();
                    candidate[i..i + size].fill(0);
                    self.consider(candidate);
                }
                i += 1;
            }
        }
    }

    /// Lowers each choice individually by binary search.
    fn minimize_choices(&mut self) {
        let mut i = 0;
        while i < self.best.len() && !self.exhausted() {
            let current = self.best[i];
            if current > 0 && !self.try_choice(i, 0) {
                let (mut lo, mut hi) = (0u64, current);
                while lo + 1 < hi && !self.exhausted() {
                    let mid = lo + (hi - lo) / 2;
                    if self.try_choice(i, mid) {
                        hi = mid;
                    } else {
                        lo = mid;
                    }
                }
            }
            i += 1;
        }
    }

    fn try_choice(&mut self, index: usize, value: u64) -> bool {
        if index >= self.best.len() {
            return false;
        }
        let mut candidate = self.best.clone();
        candidate[index] = value;
        self.consider(candidate)
    }
}
