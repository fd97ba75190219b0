//! Bubble sort, naive and early-exit.
//!
//! Only strictly greater adjacent pairs are exchanged, so every variant is
//! stable.
use crate::common::observer::{NoopObserver, SortObserver};

/// Return an ascending copy of `seq` using exactly `n - 1` passes.
pub fn bubble_sort<T: Ord + Copy>(seq: &[T]) -> Vec<T> {
    let mut result = seq.to_vec();
    bubble_sort_in_place(&mut result);
    result
}

/// Sort `seq` in place using exactly `n - 1` passes.
pub fn bubble_sort_in_place<T: Ord + Copy>(seq: &mut [T]) {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
            }
        }
    }
}

/// Return an ascending copy of `seq`, stopping after a pass with no swaps.
///
/// O(n^2) worst case, O(n) when the input is already sorted.
pub fn bubble_sort_optimized<T: Ord + Copy>(seq: &[T]) -> Vec<T> {
    bubble_sort_with_observer(seq, NoopObserver)
}

/// In-place form of [`bubble_sort_optimized`].
pub fn bubble_sort_in_place_optimized<T: Ord + Copy>(seq: &mut [T]) {
    passes_until_clean(seq, &mut NoopObserver);
}

/// Return an ascending copy of `seq`, reporting every swap.
///
/// After `seq[j]` and `seq[j + 1]` are exchanged the observer receives
/// `on_swap(seq, j, j + 1)`.
pub fn bubble_sort_with_observer<T, O>(seq: &[T], mut observer: O) -> Vec<T>
where
    T: Ord + Copy,
    O: SortObserver<T>,
{
    let mut result = seq.to_vec();
    passes_until_clean(&mut result, &mut observer);
    result
}

/// Early-exit passes shared by the optimized forms. Returns the number of
/// passes made.
pub(crate) fn passes_until_clean<T, O>(seq: &mut [T], observer: &mut O) -> usize
where
    T: Ord + Copy,
    O: SortObserver<T>,
{
    let n = seq.len();
    let mut passes = 0;
    for i in 0..n.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                swapped = true;
                observer.on_swap(seq, j, j + 1);
            }
        }
        if !swapped {
            break;
        }
    }
    passes
}
