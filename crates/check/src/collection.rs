//! Sequence domains.

use crate::source::Source;
use crate::strategy::Strategy;

/// Continuation choice upper bound: a zero choice stops the sequence, so the
/// expected number of optional elements is `CONTINUE_ODDS`.
const CONTINUE_ODDS: u64 = 7;

/// A leading choice equal to this bound selects a long sequence, whose
/// continuation odds grow with the number of optional elements.
const LONG_ODDS: u64 = 7;

/// Vectors whose length lies in `min..=max`.
#[derive(Clone, Debug)]
pub struct VecStrategy<S> {
    element: S,
    min: usize,
    max: usize,
}

/// Vectors of `element` with length in `min..=max`. Reversed bounds are
/// accepted.
pub fn vecs<S: Strategy>(element: S, min: usize, max: usize) -> VecStrategy<S> {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    VecStrategy { element, min, max }
}

impl<S> VecStrategy<S> {
    pub fn min_len(&self) -> usize {
        self.min
    }

    pub fn max_len(&self) -> usize {
        self.max
    }
}

impl<S> VecStrategy<S> {
    /// Continuation bound for one sequence. The long-sequence choice is only
    /// drawn when more optional elements are allowed than a short sequence
    /// usually reaches; a long sequence hits `max` about a third of the time.
    fn continue_odds(&self, src: &mut Source) -> u64 {
        let optional = (self.max - self.min) as u64;
        if optional > CONTINUE_ODDS && src.draw_upto(LONG_ODDS) == LONG_ODDS {
            optional
        } else {
            CONTINUE_ODDS
        }
    }
}

impl<S: Strategy> Strategy for VecStrategy<S> {
    type Value = Vec<S::Value>;

    fn draw(&self, src: &mut Source) -> Self::Value {
        let mut out = Vec::with_capacity(self.min);
        while out.len() < self.min {
            out.push(self.element.draw(src));
        }
        let odds = self.continue_odds(src);
        // each optional element is preceded by its own continuation choice,
        // so deleting that pair of choices deletes exactly one element
        while out.len() < self.max && src.draw_upto(odds) != 0 {
            out.push(self.element.draw(src));
        }
        out
    }
}
