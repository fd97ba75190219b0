//! Post-condition checks for sorted output and small dataset statistics.
use std::collections::HashMap;
use std::hash::Hash;

/// True when `seq` is in non-descending order.
///
/// Sequences of length 0 or 1 are trivially sorted; otherwise the scan stops
/// at the first adjacent inversion `seq[i] > seq[i + 1]`.
pub fn is_sorted<T: PartialOrd>(seq: &[T]) -> bool {
    if seq.len() <= 1 {
        return true;
    }
    for i in 0..seq.len() - 1 {
        if seq[i] > seq[i + 1] {
            return false;
        }
    }
    true
}

/// Same scan as [`is_sorted`] over any iterator, e.g. a linked chain.
pub fn is_sorted_iter<T, I>(iter: I) -> bool
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    let mut iter = iter.into_iter();
    let Some(mut prev) = iter.next() else {
        return true;
    };
    for item in iter {
        if prev > item {
            return false;
        }
        prev = item;
    }
    true
}

/// True when `seq` is in non-ascending order.
pub fn is_sorted_desc<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] >= w[1])
}

/// True when `min <= n <= max`.
#[inline]
pub fn is_valid_range(n: i64, min: i64, max: i64) -> bool {
    n >= min && n <= max
}

/// True when any value occurs more than once.
pub fn has_duplicates<T: Hash + Eq>(seq: &[T]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(seq.len());
    !seq.iter().all(|v| seen.insert(v))
}

/// Number of distinct values that occur more than once.
pub fn count_duplicates<T: Hash + Eq>(seq: &[T]) -> usize {
    let mut seen: HashMap<&T, usize> = HashMap::with_capacity(seq.len());
    let mut duplicates = 0;
    for v in seq {
        let count = seen.entry(v).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates += 1;
        }
    }
    duplicates
}

/// Smallest and largest value, or `None` for an empty sequence.
pub fn find_min_max<T: Ord + Copy>(seq: &[T]) -> Option<(T, T)> {
    let (&first, rest) = seq.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}
