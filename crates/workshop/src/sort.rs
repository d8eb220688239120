//! Ordering exercise.

use std::collections::BTreeMap;

/// Returns `seq` in non-decreasing order. Duplicates are kept.
pub fn sort<T: Ord>(mut seq: Vec<T>) -> Vec<T> {
    seq.sort();
    seq
}

/// Every adjacent pair satisfies `a <= b`.
pub fn is_non_decreasing<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Element counts of `seq`.
pub fn multiset<T: Ord>(seq: &[T]) -> BTreeMap<&T, usize> {
    let mut counts = BTreeMap::new();
    for item in seq {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// `a` is a permutation of `b`.
pub fn same_multiset<T: Ord>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && multiset(a) == multiset(b)
}
