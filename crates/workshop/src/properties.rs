//! Property contracts of the exercises.
//!
//! Each contract checks one input and reports through a
//! [`TestCaseResult`], so it can be handed straight to a
//! [`Runner`](workshop_check::Runner). The ones that take the implementation
//! under test as a parameter can also falsify a deliberately broken one.

use std::fmt::Debug;

use workshop_check::{check_assert, check_assert_eq, TestCaseError, TestCaseResult};

use crate::record::Record;
use crate::sort::{is_non_decreasing, same_multiset};

/// The output of `sort_impl` is a non-decreasing permutation of `seq`.
pub fn sort_contract<T, F>(sort_impl: F, seq: Vec<T>) -> TestCaseResult
where
    T: Ord + Clone + Debug,
    F: Fn(Vec<T>) -> Vec<T>,
{
    let sorted = sort_impl(seq.clone());
    check_assert!(
        same_multiset(&seq, &sorted),
        "{sorted:?} is not a permutation of {seq:?}"
    );
    check_assert!(is_non_decreasing(&sorted), "{sorted:?} is out of order");
    Ok(())
}

/// `max(seq) < sum(seq)`, with `max_and_sum` returning `None` for empty
/// input. An empty sequence has no maximum and fails the contract.
pub fn max_below_sum_contract<F>(max_and_sum: F, seq: &[i64]) -> TestCaseResult
where
    F: Fn(&[i64]) -> Option<(i64, i128)>,
{
    let (max, sum) = max_and_sum(seq)
        .ok_or_else(|| TestCaseError::fail("empty sequence has no maximum"))?;
    check_assert!(i128::from(max) < sum, "max {max} is not below sum {sum}");
    Ok(())
}

/// The padded text has `max(width, len)` scalar values, ends with `text`
/// and starts with nothing but `fill`.
pub fn leftpad_contract<F>(pad: F, text: &str, width: usize, fill: char) -> TestCaseResult
where
    F: Fn(&str, usize, char) -> String,
{
    let padded = pad(text, width, fill);
    let len = text.chars().count();
    check_assert_eq!(
        padded.chars().count(),
        width.max(len),
        "wrong length for {padded:?}"
    );
    check_assert!(
        padded.ends_with(text),
        "{padded:?} does not end with {text:?}"
    );
    let prefix = &padded[..padded.len() - text.len()];
    check_assert!(
        prefix.chars().all(|c| c == fill),
        "prefix {prefix:?} is not all {fill:?}"
    );
    Ok(())
}

/// Decoding the serial form builds a new record equal to the original.
pub fn record_round_trip(record: &Record) -> TestCaseResult {
    let serial = record.to_serial();
    let decoded = Record::from_serial(&serial)
        .map_err(|err| TestCaseError::fail(format!("{serial} did not decode: {err}")))?;
    check_assert_eq!(decoded, *record, "round trip through {serial}");
    Ok(())
}

/// Re-encoding a decoded serial form reproduces it exactly.
pub fn serial_form_is_idempotent(record: &Record) -> TestCaseResult {
    let serial = record.to_serial();
    let decoded = Record::from_serial(&serial)
        .map_err(|err| TestCaseError::fail(format!("{serial} did not decode: {err}")))?;
    check_assert_eq!(decoded.to_serial(), serial);
    Ok(())
}
