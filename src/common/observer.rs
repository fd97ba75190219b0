//! Instrumentation hooks for the array engines.
//!
//! Engines always take an observer; callers that do not care pass
//! [`NoopObserver`], which compiles down to nothing.

/// Receives the in-progress sequence after each element movement.
/// Used for visualization and counting only, never for control flow.
pub trait SortObserver<T> {
    /// Called after `seq[i]` and `seq[j]` were exchanged.
    #[inline]
    fn on_swap(&mut self, _seq: &[T], _i: usize, _j: usize) {}

    /// Called after the key taken from index `from` was placed at index `to`.
    #[inline]
    fn on_insert(&mut self, _seq: &[T], _to: usize, _from: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T> SortObserver<T> for NoopObserver {}

/// Counts the events an engine reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SwapCounter {
    pub swaps: usize,
    pub inserts: usize,
}

impl<T> SortObserver<T> for SwapCounter {
    #[inline]
    fn on_swap(&mut self, _seq: &[T], _i: usize, _j: usize) {
        self.swaps += 1;
    }

    #[inline]
    fn on_insert(&mut self, _seq: &[T], _to: usize, _from: usize) {
        self.inserts += 1;
    }
}

impl<T, O: SortObserver<T> + ?Sized> SortObserver<T> for &mut O {
    #[inline]
    fn on_swap(&mut self, seq: &[T], i: usize, j: usize) {
        (**self).on_swap(seq, i, j)
    }

    #[inline]
    fn on_insert(&mut self, seq: &[T], to: usize, from: usize) {
        (**self).on_insert(seq, to, from)
    }
}
