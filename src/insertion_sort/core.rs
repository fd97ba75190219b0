//! Insertion sort variants.
//!
//! The linear, binary-search and descending variants are stable. All copying
//! forms leave their input untouched.
use crate::common::observer::SortObserver;

/// Return an ascending copy of `seq`.
///
/// O(n^2) worst and average case, O(n) on already sorted input.
pub fn insertion_sort<T: Ord + Copy>(seq: &[T]) -> Vec<T> {
    let mut result = seq.to_vec();
    insertion_sort_in_place(&mut result);
    result
}

/// Sort `seq` ascending in place by shifting larger predecessors right.
pub fn insertion_sort_in_place<T: Ord + Copy>(seq: &mut [T]) {
    for i in 1..seq.len() {
        let key = seq[i];
        let mut j = i;
        while j > 0 && seq[j - 1] > key {
            seq[j] = seq[j - 1];
            j -= 1;
        }
        seq[j] = key;
    }
}

/// Return an ascending copy of `seq`, locating each slot by binary search.
///
/// Comparisons drop to O(log n) per element but shifting keeps the whole
/// sort at O(n^2).
pub fn insertion_sort_binary<T: Ord + Copy>(seq: &[T]) -> Vec<T> {
    let mut result = seq.to_vec();
    insertion_sort_binary_in_place(&mut result);
    result
}

/// In-place form of [`insertion_sort_binary`].
pub fn insertion_sort_binary_in_place<T: Ord + Copy>(seq: &mut [T]) {
    for i in 1..seq.len() {
        let key = seq[i];
        // First index whose element is greater than key: equal elements stay
        // ahead of the key, which keeps the sort stable.
        let slot = seq[..i].partition_point(|existing| *existing <= key);
        seq[slot..=i].rotate_right(1);
    }
}

/// Return a descending copy of `seq`.
pub fn insertion_sort_descending<T: Ord + Copy>(seq: &[T]) -> Vec<T> {
    let mut result = seq.to_vec();
    for i in 1..result.len() {
        let key = result[i];
        let mut j = i;
        while j > 0 && result[j - 1] < key {
            result[j] = result[j - 1];
            j -= 1;
        }
        result[j] = key;
    }
    result
}

/// Return a copy of `seq` with each stride-`gap` subsequence sorted.
///
/// This is the pass Shell sort runs with a shrinking gap. A gap of 1 is a
/// full insertion sort; a gap of 0 returns the input unchanged.
pub fn insertion_sort_with_gap<T: Ord + Copy>(seq: &[T], gap: usize) -> Vec<T> {
    let mut result = seq.to_vec();
    if gap == 0 {
        return result;
    }
    for i in gap..result.len() {
        let key = result[i];
        let mut j = i;
        while j >= gap && result[j - gap] > key {
            result[j] = result[j - gap];
            j -= gap;
        }
        result[j] = key;
    }
    result
}

/// Return an ascending copy of `seq`, reporting every placement.
///
/// After the key taken from index `i` lands at index `j`, the observer
/// receives `on_insert(seq, j, i)`; this fires for every `i >= 1`, including
/// keys that stay where they were.
pub fn insertion_sort_with_observer<T, O>(seq: &[T], mut observer: O) -> Vec<T>
where
    T: Ord + Copy,
    O: SortObserver<T>,
{
    let mut result = seq.to_vec();
    for i in 1..result.len() {
        let key = result[i];
        let mut j = i;
        while j > 0 && result[j - 1] > key {
            result[j] = result[j - 1];
            j -= 1;
        }
        result[j] = key;
        observer.on_insert(&result, j, i);
    }
    result
}
