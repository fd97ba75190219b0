#![allow(clippy::needless_range_loop, clippy::manual_range_contains)]

/// Use mimalloc as the global allocator for all binaries.
/// Merge sort chains allocate one node per value, so small-allocation
/// throughput dominates list construction for the larger benchmarks.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod bench;
pub mod bubble_sort;
pub mod common;
pub mod format;
pub mod generate;
pub mod input;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod terminal;
pub mod verify;

pub use common::error::{Result, SortKitError};
pub use common::observer::{NoopObserver, SortObserver, SwapCounter};
