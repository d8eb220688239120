//! Numeric and boolean domains.

use std::fmt;
use std::marker::PhantomData;

use crate::source::Source;
use crate::strategy::Strategy;

/// Number of bit-width choices that jump straight to a range bound.
const EDGE_WIDTHS: u64 = 7;

mod sealed {
    pub trait Sealed {}
}

/// Integer types usable with [`integers`]. The span of every implementor
/// fits in a `u64`, which is what the choice encoding needs.
pub trait Bounded: Copy + fmt::Debug + sealed::Sealed {
    fn to_i128(self) -> i128;
    /// Only called with values inside the type's range.
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_bounded {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Bounded for $t {
            fn to_i128(self) -> i128 {
                self as i128
            }
            fn from_i128(value: i128) -> Self {
                value as $t
            }
        }
    )*};
}

impl_bounded!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Integers in an inclusive range.
///
/// Draws are biased toward the bounds and toward small magnitudes; all-zero
/// choices give the in-range value closest to zero.
pub struct Integers<T> {
    lo: i128,
    hi: i128,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Integers<T> {
    fn clone(&self) -> Self {
        Self {
            lo: self.lo,
            hi: self.hi,
            _marker: PhantomData,
        }
    }
}

/// Integers in `lo..=hi`. Reversed bounds are accepted.
pub fn integers<T: Bounded>(lo: T, hi: T) -> Integers<T> {
    let (lo, hi) = (lo.to_i128(), hi.to_i128());
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    Integers {
        lo,
        hi,
        _marker: PhantomData,
    }
}

/// Every `i64`.
pub fn any_i64() -> Integers<i64> {
    integers(i64::MIN, i64::MAX)
}

impl<T: Bounded> Integers<T> {
    /// The value all-zero choices produce.
    pub fn origin(&self) -> T {
        T::from_i128(0i128.clamp(self.lo, self.hi))
    }
}

impl<T: Bounded> Strategy for Integers<T> {
    type Value = T;

    fn draw(&self, src: &mut Source) -> T {
        let origin = 0i128.clamp(self.lo, self.hi);
        let up = (self.hi - origin) as u64;
        let down = (origin - self.lo) as u64;
        let negative = match (up > 0, down > 0) {
            (true, true) => src.draw_upto(1) == 1,
            (false, true) => true,
            _ => false,
        };
        let span = if negative { down } else { up };
        // Widths above 64 select the bound on the chosen side. The magnitude
        // choice is still recorded, forced to the span, so lowering the width
        // afterwards lands on a large ordinary value instead of zero.
        let bits = src.draw_upto(64 + EDGE_WIDTHS);
        let magnitude = if bits > 64 {
            src.draw_forced(span, span);
            span
        } else {
            let cap = if bits == 64 {
                u64::MAX
            } else {
                (1u64 << bits) - 1
            };
            src.draw_upto(cap.min(span))
        };
        let magnitude = i128::from(magnitude);
        let value = if negative {
            origin - magnitude
        } else {
            origin + magnitude
        };
        T::from_i128(value)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Booleans;

pub fn booleans() -> Booleans {
    Booleans
}

impl Strategy for Booleans {
    type Value = bool;

    fn draw(&self, src: &mut Source) -> bool {
        src.draw_upto(1) == 1
    }
}

const SPECIAL_FLOATS: [f64; 14] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    0.5,
    0.1,
    1.0e300,
    -1.0e300,
    f64::EPSILON,
    f64::MIN_POSITIVE,
    -f64::MIN_POSITIVE,
    5.0e-324,
    f64::MAX,
    f64::MIN,
];

/// Finite `f64` values: never NaN, never infinite.
#[derive(Clone, Copy, Debug)]
pub struct FiniteFloats;

pub fn finite_floats() -> FiniteFloats {
    FiniteFloats
}

impl Strategy for FiniteFloats {
    type Value = f64;

    // Every tier consumes `FLOAT_CHOICES` choices so that lowering the tier
    // never makes the choice sequence longer.
    fn draw(&self, src: &mut Source) -> f64 {
        match src.draw_upto(3) {
            0 => {
                let n = src.draw_upto(100) as f64;
                let negative = src.draw_upto(1) == 1;
                pad(src, 1);
                if negative {
                    -n
                } else {
                    n
                }
            }
            1 => {
                let special = SPECIAL_FLOATS[src.draw_upto(SPECIAL_FLOATS.len() as u64 - 1) as usize];
                pad(src, 2);
                special
            }
            2 => {
                let num = src.draw_upto(10_000) as f64;
                let den = (src.draw_upto(999) + 1) as f64;
                if src.draw_upto(1) == 1 {
                    -num / den
                } else {
                    num / den
                }
            }
            _ => {
                let raw = src.draw_u64();
                pad(src, 2);
                let value = f64::from_bits(raw);
                if value.is_finite() {
                    value
                } else {
                    // clearing the top exponent bit leaves a finite value
                    f64::from_bits(raw & !(1u64 << 62))
                }
            }
        }
    }
}

const FLOAT_CHOICES: usize = 4;

fn pad(src: &mut Source, count: usize) {
    debug_assert!(count < FLOAT_CHOICES);
    for _ in 0..count {
        src.draw_upto(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_choices_give_origin() {
        let mut src = Source::replay(vec![]);
        assert_eq!(any_i64().draw(&mut src), 0);
        assert_eq!(integers(1i64, i64::MAX).draw(&mut src), 1);
        assert_eq!(integers(-9i64, -3).draw(&mut src), -3);
        assert_eq!(integers(0usize, 1000).origin(), 0);
    }

    #[test]
    fn reversed_bounds_are_accepted() {
        let strategy = integers(10i64, -10);
        let mut src = Source::from_seed(11);
        for _ in 0..200 {
            assert!((-10..=10).contains(&strategy.draw(&mut src)));
        }
    }

    #[test]
    fn full_range_reaches_extremes() {
        let strategy = any_i64();
        let mut src = Source::from_seed(12);
        let drawn: Vec<i64> = (0..2_000).map(|_| strategy.draw(&mut src)).collect();
        assert!(drawn.contains(&i64::MIN));
        assert!(drawn.contains(&i64::MAX));
        assert!(drawn.iter().any(|n| (-100..=100).contains(n)));
    }

    #[test]
    fn unsigned_full_range_stays_in_type() {
        let strategy = integers(0u64, u64::MAX);
        let mut src = Source::from_seed(13);
        let drawn: Vec<u64> = (0..2_000).map(|_| strategy.draw(&mut src)).collect();
        assert!(drawn.contains(&u64::MAX));
    }

    #[test]
    fn floats_are_always_finite() {
        let mut src = Source::from_seed(14);
        for _ in 0..5_000 {
            assert!(finite_floats().draw(&mut src).is_finite());
        }
        let mut src = Source::replay(vec![3, u64::MAX]);
        assert!(finite_floats().draw(&mut src).is_finite());
    }
}
