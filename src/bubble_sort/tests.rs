use super::*;
use super::core::passes_until_clean;
use crate::common::observer::{NoopObserver, SortObserver, SwapCounter};
use crate::verify::is_sorted;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i64,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Records every swap and checks the reported pair really was exchanged.
#[derive(Default)]
struct SwapLog(Vec<(usize, usize)>);

impl SortObserver<i64> for SwapLog {
    fn on_swap(&mut self, seq: &[i64], i: usize, j: usize) {
        assert_eq!(j, i + 1);
        assert!(seq[i] <= seq[j]);
        self.0.push((i, j));
    }
}

#[test]
fn test_bubble_sort_basic() {
    assert_eq!(bubble_sort(&[4, 2, 5, 1, 3, 6]), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(bubble_sort(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        bubble_sort(&[64, 34, 25, 12, 22, 11, 90, 88, 76, 50, 42]),
        vec![11, 12, 22, 25, 34, 42, 50, 64, 76, 88, 90]
    );
}

#[test]
fn test_bubble_sort_empty_and_single() {
    assert!(bubble_sort::<i64>(&[]).is_empty());
    assert_eq!(bubble_sort(&[5]), vec![5]);
    assert!(bubble_sort_optimized::<i64>(&[]).is_empty());
    assert_eq!(bubble_sort_optimized(&[5]), vec![5]);
}

#[test]
fn test_bubble_sort_duplicates_and_negatives() {
    assert_eq!(
        bubble_sort(&[4, 2, 5, 1, 3, 2, 4]),
        vec![1, 2, 2, 3, 4, 4, 5]
    );
    assert_eq!(
        bubble_sort_optimized(&[-5, 2, -3, 8, 1, -1]),
        vec![-5, -3, -1, 1, 2, 8]
    );
}

#[test]
fn test_bubble_sort_leaves_input_untouched() {
    let input = vec![3, 1, 2];
    let _ = bubble_sort(&input);
    let _ = bubble_sort_optimized(&input);
    let _ = bubble_sort_with_observer(&input, NoopObserver);
    assert_eq!(input, vec![3, 1, 2]);
}

#[test]
fn test_bubble_sort_in_place_variants() {
    let mut naive = vec![4, 2, 5, 1, 3, 2, 4];
    bubble_sort_in_place(&mut naive);
    assert_eq!(naive, vec![1, 2, 2, 3, 4, 4, 5]);

    let mut optimized = vec![4, 2, 5, 1, 3, 2, 4];
    bubble_sort_in_place_optimized(&mut optimized);
    assert_eq!(optimized, vec![1, 2, 2, 3, 4, 4, 5]);

    let mut empty: Vec<i64> = vec![];
    bubble_sort_in_place(&mut empty);
    bubble_sort_in_place_optimized(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_bubble_sort_optimized_sorted_input_makes_no_swaps() {
    let mut counter = SwapCounter::default();
    let result = bubble_sort_with_observer(&[1, 2, 3, 4, 5], &mut counter);
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
    assert_eq!(counter.swaps, 0);

    let mut data = vec![1, 2, 3, 4, 5];
    assert_eq!(passes_until_clean(&mut data, &mut NoopObserver), 1);
}

#[test]
fn test_bubble_sort_optimized_stops_early() {
    // One adjacent inversion: one pass to fix it, one clean pass to confirm
    let mut data = vec![1, 3, 2, 4, 5, 6];
    assert_eq!(passes_until_clean(&mut data, &mut NoopObserver), 2);
    assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_bubble_sort_reverse_input_swap_count() {
    // Every pair is an inversion: n * (n - 1) / 2 swaps
    let mut counter = SwapCounter::default();
    let _ = bubble_sort_with_observer(&[5, 4, 3, 2, 1], &mut counter);
    assert_eq!(counter.swaps, 10);
}

#[test]
fn test_bubble_sort_with_observer_reports_pairs() {
    let mut log = SwapLog::default();
    let result = bubble_sort_with_observer(&[3, 1, 2], &mut log);
    assert_eq!(result, vec![1, 2, 3]);
    assert_eq!(log.0, vec![(0, 1), (1, 2)]);
}

#[test]
fn test_bubble_sort_with_noop_observer_matches_optimized() {
    let input = [9, -1, 4, 4, 0, 7];
    assert_eq!(
        bubble_sort_with_observer(&input, NoopObserver),
        bubble_sort_optimized(&input)
    );
}

#[test]
fn test_bubble_sort_is_stable() {
    let input: Vec<Tagged> = [3, 1, 3, 2, 3]
        .iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect();
    for result in [bubble_sort(&input), bubble_sort_optimized(&input)] {
        let tags: Vec<usize> = result.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![1, 3, 0, 2, 4]);
    }
}

proptest! {
    #[test]
    fn prop_bubble_variants_match_std(values in proptest::collection::vec(-500i64..500, 0..100)) {
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(bubble_sort(&values), expected.clone());
        prop_assert_eq!(bubble_sort_optimized(&values), expected.clone());

        let mut in_place = values.clone();
        bubble_sort_in_place_optimized(&mut in_place);
        prop_assert!(is_sorted(&in_place));
        prop_assert_eq!(in_place, expected);
    }

    #[test]
    fn prop_sorted_input_is_idempotent(values in proptest::collection::vec(-500i64..500, 0..100)) {
        let mut sorted = values.clone();
        sorted.sort();
        let mut counter = SwapCounter::default();
        prop_assert_eq!(bubble_sort_with_observer(&sorted, &mut counter), sorted.clone());
        prop_assert_eq!(counter.swaps, 0);
    }
}
