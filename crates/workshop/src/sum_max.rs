//! Domain-constrained inequality exercise: `max(seq) < sum(seq)`.
//!
//! The inequality holds for every sequence of at least two strictly
//! positive integers and can fail as soon as either restriction is dropped.
//! The sum is accumulated in `i128`, which no sequence of `i64` that fits
//! in memory can overflow.

/// Maximum and sum of `seq`, or `None` when it is empty.
pub fn max_and_sum(seq: &[i64]) -> Option<(i64, i128)> {
    let max = *seq.iter().max()?;
    let sum = seq.iter().map(|n| i128::from(*n)).sum();
    Some((max, sum))
}

/// Whether `max(seq) < sum(seq)`; `None` when `seq` is empty.
pub fn max_below_sum(seq: &[i64]) -> Option<bool> {
    max_and_sum(seq).map(|(max, sum)| i128::from(max) < sum)
}
