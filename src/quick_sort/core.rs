//! Quick sort with Lomuto partitioning and selectable pivots.
//!
//! Not stable: partition swaps may reorder equal keys.
use rand::Rng;

/// Which element of the active range becomes the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    #[default]
    LastElement,
    FirstElement,
    MiddleElement,
    /// Uniformly drawn index in the active range.
    RandomElement,
}

impl PivotStrategy {
    pub fn name(self) -> &'static str {
        match self {
            PivotStrategy::LastElement => "last",
            PivotStrategy::FirstElement => "first",
            PivotStrategy::MiddleElement => "middle",
            PivotStrategy::RandomElement => "random",
        }
    }

    pub fn all() -> [PivotStrategy; 4] {
        [
            PivotStrategy::LastElement,
            PivotStrategy::FirstElement,
            PivotStrategy::MiddleElement,
            PivotStrategy::RandomElement,
        ]
    }
}

/// Pick the pivot index for the inclusive range `low..=high`.
///
/// Only [`PivotStrategy::RandomElement`] touches `rng`.
#[inline]
pub fn choose_pivot<R: Rng + ?Sized>(
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    rng: &mut R,
) -> usize {
    match strategy {
        PivotStrategy::FirstElement => low,
        PivotStrategy::MiddleElement => low + (high - low) / 2,
        PivotStrategy::RandomElement => rng.gen_range(low..=high),
        PivotStrategy::LastElement => high,
    }
}

/// Lomuto partition of `seq` around its last element.
///
/// Elements `<= pivot` end up left of the returned index, larger ones to the
/// right, and the pivot itself at the returned index.
pub fn partition<T: Ord + Copy>(seq: &mut [T]) -> usize {
    let high = seq.len() - 1;
    let pivot = seq[high];

    // Number of elements known to be <= pivot
    let mut boundary = 0;
    for j in 0..high {
        if seq[j] <= pivot {
            seq.swap(boundary, j);
            boundary += 1;
        }
    }
    seq.swap(boundary, high);
    boundary
}

/// Return a sorted copy of `seq` using the last element as pivot.
pub fn quick_sort<T: Ord + Copy>(seq: &[T]) -> Vec<T> {
    quick_sort_with(seq, PivotStrategy::LastElement)
}

/// Sort `seq` in place using the last element as pivot.
pub fn quick_sort_in_place<T: Ord + Copy>(seq: &mut [T]) {
    quick_sort_in_place_with(seq, PivotStrategy::LastElement)
}

/// Return a sorted copy of `seq` using `strategy` to pick pivots.
pub fn quick_sort_with<T: Ord + Copy>(seq: &[T], strategy: PivotStrategy) -> Vec<T> {
    let mut result = seq.to_vec();
    quick_sort_in_place_with(&mut result, strategy);
    result
}

/// Sort `seq` in place using `strategy` to pick pivots.
pub fn quick_sort_in_place_with<T: Ord + Copy>(seq: &mut [T], strategy: PivotStrategy) {
    if seq.len() <= 1 {
        return;
    }
    quick_sort_in_place_with_rng(seq, strategy, &mut rand::thread_rng());
}

/// Sort `seq` in place drawing random pivots from `rng`.
///
/// With a seeded generator the sequence of pivot choices, and therefore the
/// final arrangement of equal keys, is reproducible.
pub fn quick_sort_in_place_with_rng<T: Ord + Copy, R: Rng + ?Sized>(
    seq: &mut [T],
    strategy: PivotStrategy,
    rng: &mut R,
) {
    sort_range(seq, 0, strategy, rng);
}

/// Sort one range. `offset` is the absolute index of `seq[0]` in the
/// caller's slice so that pivot selection matches absolute `low`/`high`.
///
/// Recurses into the smaller side and loops on the larger one, which keeps
/// the stack O(log n) even when every pivot is the range minimum.
fn sort_range<T: Ord + Copy, R: Rng + ?Sized>(
    mut seq: &mut [T],
    mut offset: usize,
    strategy: PivotStrategy,
    rng: &mut R,
) {
    while seq.len() > 1 {
        let low = offset;
        let high = offset + seq.len() - 1;
        let pivot = choose_pivot(low, high, strategy, rng) - offset;
        let last = seq.len() - 1;
        if pivot != last {
            seq.swap(pivot, last);
        }

        let p = partition(seq);
        let (left, rest) = std::mem::take(&mut seq).split_at_mut(p);
        let right = &mut rest[1..];

        if left.len() <= right.len() {
            sort_range(left, offset, strategy, rng);
            offset += p + 1;
            seq = right;
        } else {
            sort_range(right, offset + p + 1, strategy, rng);
            seq = left;
        }
    }
}
