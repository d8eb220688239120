//! Generation domains for the exercises.
//!
//! Each function returns the strategy its property is checked against. The
//! restrictions live here rather than in the properties, so shrinking never
//! leaves the domain: a minimal counterexample for
//! [`positive_sequences`] still has at least two elements, all positive.

use serde_json::Value;
use workshop_check::{
    any_char, any_i64, integers, text, vecs, AnyChar, Integers, Map, Strategy, Text, VecStrategy,
};
use workshop_json_random::{json_values, JsonStrategy};

use crate::record::Record;

/// Longest sequence drawn for the sort and sum-vs-max exercises.
pub const MAX_SEQUENCE_LEN: usize = 64;
/// Longest text drawn for leftpad, in scalar values.
pub const MAX_TEXT_LEN: usize = 1000;
/// Largest target width drawn for leftpad.
pub const MAX_WIDTH: usize = 1000;

/// Any sequence of `i64`, including empty ones, duplicates and extremes.
pub fn integer_sequences() -> VecStrategy<Integers<i64>> {
    vecs(any_i64(), 0, MAX_SEQUENCE_LEN)
}

/// Sequences of at least two integers, each at least 1.
pub fn positive_sequences() -> VecStrategy<Integers<i64>> {
    vecs(integers(1, i64::MAX), 2, MAX_SEQUENCE_LEN)
}

/// `(text, width, fill)` triples for leftpad.
pub fn leftpad_inputs() -> (Text<AnyChar>, Integers<usize>, AnyChar) {
    (
        text(any_char(), 0, MAX_TEXT_LEN),
        integers(0, MAX_WIDTH),
        any_char(),
    )
}

/// Records over the default JSON-like value domain.
pub fn records() -> Map<JsonStrategy, fn(Value) -> Record> {
    json_values().map(Record::new as fn(Value) -> Record)
}
