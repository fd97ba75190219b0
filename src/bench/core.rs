//! Timed sorting runs and multi-size benchmark summaries.
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::bubble_sort::bubble_sort_optimized;
use crate::common::error::SortKitError;
use crate::generate::RandomGenerator;
use crate::insertion_sort::insertion_sort;
use crate::merge_sort::List;
use crate::quick_sort::{PivotStrategy, quick_sort_with};
use crate::verify::is_sorted;

/// Dataset sizes used by "run all benchmarks".
pub const DEFAULT_SIZES: [usize; 4] = [500, 1000, 5000, 10000];

/// The sorting engines the harness can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    MergeSort,
    QuickSort,
    BubbleSort,
    InsertionSort,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::InsertionSort => "Insertion Sort",
        }
    }

    /// Menu order.
    pub fn all() -> [Algorithm; 4] {
        [
            Algorithm::MergeSort,
            Algorithm::QuickSort,
            Algorithm::BubbleSort,
            Algorithm::InsertionSort,
        ]
    }

    /// Merge sort runs on a linked chain rather than an array.
    pub fn is_linked(self) -> bool {
        matches!(self, Algorithm::MergeSort)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "merge" | "mergesort" => Ok(Algorithm::MergeSort),
            "quick" | "quicksort" => Ok(Algorithm::QuickSort),
            "bubble" | "bubblesort" => Ok(Algorithm::BubbleSort),
            "insertion" | "insertionsort" => Ok(Algorithm::InsertionSort),
            _ => Err(SortKitError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Sorted output in the representation the engine works on.
#[derive(Debug)]
pub enum SortedOutput {
    Array(Vec<i64>),
    Chain(List),
}

impl SortedOutput {
    pub fn len(&self) -> usize {
        match self {
            SortedOutput::Array(v) => v.len(),
            SortedOutput::Chain(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sorted(&self) -> bool {
        match self {
            SortedOutput::Array(v) => is_sorted(v),
            SortedOutput::Chain(list) => list.is_sorted(),
        }
    }

    pub fn prefix(&self, max: usize) -> Vec<i64> {
        match self {
            SortedOutput::Array(v) => v.iter().take(max).copied().collect(),
            SortedOutput::Chain(list) => list.prefix(max),
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        match self {
            SortedOutput::Array(v) => v.clone(),
            SortedOutput::Chain(list) => list.to_vec(),
        }
    }
}

/// Sort `values` with `algorithm` using each engine's default variant:
/// last-element pivots, linear insertion, early-exit bubble passes.
pub fn sort_with(algorithm: Algorithm, values: &[i64]) -> Vec<i64> {
    match run_engine(algorithm, values) {
        SortedOutput::Array(v) => v,
        SortedOutput::Chain(list) => list.into_iter().collect(),
    }
}

fn run_engine(algorithm: Algorithm, values: &[i64]) -> SortedOutput {
    match algorithm {
        Algorithm::MergeSort => SortedOutput::Chain(List::from_slice(values).sort()),
        Algorithm::QuickSort => {
            SortedOutput::Array(quick_sort_with(values, PivotStrategy::LastElement))
        }
        Algorithm::BubbleSort => SortedOutput::Array(bubble_sort_optimized(values)),
        Algorithm::InsertionSort => SortedOutput::Array(insertion_sort(values)),
    }
}

/// Cost figures derived from a single timed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerformanceAnalysis {
    /// Microseconds per input value.
    pub time_per_number: f64,
    /// `n * log2(n)`.
    pub theoretical_ops: f64,
    /// Nanoseconds per theoretical operation.
    pub time_per_operation: f64,
}

impl PerformanceAnalysis {
    pub fn calculate(count: usize, duration: Duration) -> Self {
        if count == 0 {
            return PerformanceAnalysis::default();
        }
        let nanos = duration.as_nanos() as f64;
        let n = count as f64;
        let theoretical_ops = n * n.log2();
        let time_per_operation = if theoretical_ops > 0.0 {
            nanos / theoretical_ops
        } else {
            0.0
        };
        PerformanceAnalysis {
            time_per_number: nanos / n / 1000.0,
            theoretical_ops,
            time_per_operation,
        }
    }
}

/// Outcome of one timed sort.
#[derive(Debug)]
pub struct SortRun {
    pub algorithm: Algorithm,
    pub sorted: SortedOutput,
    pub duration: Duration,
    pub count: usize,
    pub is_sorted: bool,
    pub analysis: PerformanceAnalysis,
}

/// Sort `values` and time only the engine call.
///
/// For merge sort the chain is built before the clock starts, matching how
/// the chain would arrive from a caller.
pub fn timed_sort(algorithm: Algorithm, values: &[i64]) -> SortRun {
    let count = values.len();
    let (sorted, duration) = if algorithm.is_linked() {
        let list = List::from_slice(values);
        let start = Instant::now();
        let sorted = list.sort();
        (SortedOutput::Chain(sorted), start.elapsed())
    } else {
        let start = Instant::now();
        let sorted = run_engine(algorithm, values);
        (sorted, start.elapsed())
    };

    SortRun {
        algorithm,
        is_sorted: sorted.is_sorted(),
        sorted,
        duration,
        count,
        analysis: PerformanceAnalysis::calculate(count, duration),
    }
}

fn serialize_nanos<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_nanos())
}

/// One row of a benchmark summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub count: usize,
    #[serde(rename = "duration_ns", serialize_with = "serialize_nanos")]
    pub duration: Duration,
    pub is_sorted: bool,
}

impl BenchmarkResult {
    /// Microseconds per input value.
    pub fn time_per_number(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.duration.as_nanos() as f64 / self.count as f64 / 1000.0
    }
}

/// Growth between two consecutive benchmark sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingAnalysis {
    pub from_size: usize,
    pub to_size: usize,
    pub size_ratio: f64,
    pub time_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    pub algorithm: Algorithm,
    pub results: Vec<BenchmarkResult>,
    pub scaling: Vec<ScalingAnalysis>,
}

impl BenchmarkSummary {
    pub fn from_results(algorithm: Algorithm, results: Vec<BenchmarkResult>) -> Self {
        let scaling = calculate_scaling(&results);
        BenchmarkSummary {
            algorithm,
            results,
            scaling,
        }
    }

    pub fn all_sorted(&self) -> bool {
        self.results.iter().all(|r| r.is_sorted)
    }
}

/// Size and time ratios between each pair of consecutive results.
///
/// Fewer than two results give no ratios. A zero previous duration or
/// count yields a ratio of 0 rather than infinity.
pub fn calculate_scaling(results: &[BenchmarkResult]) -> Vec<ScalingAnalysis> {
    results
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            ScalingAnalysis {
                from_size: prev.count,
                to_size: curr.count,
                size_ratio: ratio(curr.count as f64, prev.count as f64),
                time_ratio: ratio(
                    curr.duration.as_nanos() as f64,
                    prev.duration.as_nanos() as f64,
                ),
            }
        })
        .collect()
}

#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

/// Generate `count` random values (1..=1000) and time one sort of them.
pub fn benchmark_once(
    algorithm: Algorithm,
    count: usize,
    generator: &mut RandomGenerator,
) -> BenchmarkResult {
    let values = generator.generate_default(count);
    let run = timed_sort(algorithm, &values);
    BenchmarkResult {
        count,
        duration: run.duration,
        is_sorted: run.is_sorted && run.sorted.len() == count,
    }
}

/// Benchmark every size in order and attach the scaling analysis.
pub fn run_benchmarks(
    algorithm: Algorithm,
    sizes: &[usize],
    generator: &mut RandomGenerator,
) -> BenchmarkSummary {
    let results = sizes
        .iter()
        .map(|&count| benchmark_once(algorithm, count, generator))
        .collect();
    BenchmarkSummary::from_results(algorithm, results)
}
