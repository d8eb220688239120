//! Character and text domains over Unicode scalar values.

use crate::collection::{vecs, VecStrategy};
use crate::source::Source;
use crate::strategy::Strategy;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

/// Maps an index over the scalar values (surrogates skipped) to a `char`.
fn scalar_from_index(index: u32) -> char {
    let code = if index >= SURROGATE_START {
        index + SURROGATE_LEN
    } else {
        index
    };
    char::from_u32(code).unwrap_or('\u{FFFD}')
}

/// Any Unicode scalar value.
///
/// Tiers, simplest first: printable ASCII, all ASCII, the Basic Multilingual
/// Plane, every plane.
#[derive(Clone, Copy, Debug)]
pub struct AnyChar;

pub fn any_char() -> AnyChar {
    AnyChar
}

impl Strategy for AnyChar {
    type Value = char;

    fn draw(&self, src: &mut Source) -> char {
        match src.draw_upto(3) {
            0 => scalar_from_index(0x20 + src.draw_upto(0x7E - 0x20) as u32),
            1 => scalar_from_index(src.draw_upto(0x7F) as u32),
            2 => scalar_from_index(src.draw_upto(u64::from(0xFFFF - SURROGATE_LEN)) as u32),
            _ => scalar_from_index(src.draw_upto(u64::from(0x10_FFFF - SURROGATE_LEN)) as u32),
        }
    }
}

/// Scalar values in `lo..=hi`, skipping surrogates.
#[derive(Clone, Copy, Debug)]
pub struct CharRange {
    lo: u32,
    len: u32,
}

pub fn char_range(lo: char, hi: char) -> CharRange {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let (lo, hi) = (lo as u32, hi as u32);
    let gap = if lo < SURROGATE_START && hi >= SURROGATE_START + SURROGATE_LEN {
        SURROGATE_LEN
    } else {
        0
    };
    CharRange {
        lo,
        len: hi - lo - gap,
    }
}

impl Strategy for CharRange {
    type Value = char;

    fn draw(&self, src: &mut Source) -> char {
        let code = self.lo + src.draw_upto(u64::from(self.len)) as u32;
        if self.lo < SURROGATE_START {
            scalar_from_index(code)
        } else {
            char::from_u32(code).unwrap_or('\u{FFFD}')
        }
    }
}

/// Strings of `min..=max` scalar values drawn from a character domain.
#[derive(Clone, Debug)]
pub struct Text<C> {
    chars: VecStrategy<C>,
}

pub fn text<C: Strategy<Value = char>>(chars: C, min: usize, max: usize) -> Text<C> {
    Text {
        chars: vecs(chars, min, max),
    }
}

impl<C: Strategy<Value = char>> Strategy for Text<C> {
    type Value = String;

    fn draw(&self, src: &mut Source) -> String {
        self.chars.draw(src).into_iter().collect()
    }
}
