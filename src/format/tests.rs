use super::*;
use crate::bench::{
    Algorithm, BenchmarkResult, BenchmarkSummary, PerformanceAnalysis, SortRun, SortedOutput,
};
use std::time::Duration;

fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn run(count: usize, duration: Duration, is_sorted: bool) -> SortRun {
    SortRun {
        algorithm: Algorithm::QuickSort,
        sorted: SortedOutput::Array(vec![0; count]),
        duration,
        count,
        is_sorted,
        analysis: PerformanceAnalysis::calculate(count, duration),
    }
}

// ──────────────────────────────────────────────────
// Numbers and durations
// ──────────────────────────────────────────────────

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(10000), "10,000");
    assert_eq!(format_number(1_000_000), "1,000,000");
    assert_eq!(format_number(123_456_789), "123,456,789");
    assert_eq!(format_number(-12345), "-12,345");
    assert_eq!(format_number(-7), "-7");
    assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(5000), "5,000");
    assert_eq!(format_count(usize::MAX), format_number(i64::MAX));
}

#[test]
fn test_format_duration_small_units() {
    assert_eq!(format_duration(Duration::ZERO), "0s");
    assert_eq!(format_duration(Duration::from_nanos(512)), "512ns");
    assert_eq!(format_duration(Duration::from_nanos(1500)), "1.5µs");
    assert_eq!(format_duration(Duration::from_micros(7)), "7µs");
    assert_eq!(format_duration(Duration::from_micros(2250)), "2.25ms");
    assert_eq!(format_duration(Duration::from_nanos(1_000_001)), "1.000001ms");
}

#[test]
fn test_format_duration_seconds_and_up() {
    assert_eq!(format_duration(Duration::from_millis(1200)), "1.2s");
    assert_eq!(format_duration(Duration::from_secs(1)), "1s");
    assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
    assert_eq!(format_duration(Duration::from_millis(120_500)), "2m0.5s");
    assert_eq!(format_duration(Duration::from_secs(3605)), "1h0m5s");
}

// ──────────────────────────────────────────────────
// Sequences
// ──────────────────────────────────────────────────

#[test]
fn test_write_lines() {
    assert_eq!(render(|o| write_lines(o, &[3, -1, 20])), "3\n-1\n20\n");
    assert_eq!(render(|o| write_lines(o, &[])), "");
}

#[test]
fn test_write_slice() {
    assert_eq!(render(|o| write_slice(o, &[1, 2, 3])), "[1, 2, 3]\n");
    assert_eq!(render(|o| write_slice(o, &[])), "[]\n");
    assert_eq!(render(|o| write_slice(o, &[-4])), "[-4]\n");
}

#[test]
fn test_write_slice_partial() {
    assert_eq!(
        render(|o| write_slice_partial(o, &[1, 2, 3, 4], 2)),
        "[1, 2, ... (and more)]\n"
    );
    assert_eq!(render(|o| write_slice_partial(o, &[1, 2], 2)), "[1, 2]\n");
    assert_eq!(render(|o| write_slice_partial(o, &[1], 20)), "[1]\n");
}

#[test]
fn test_write_chain() {
    assert_eq!(render(|o| write_chain(o, vec![1, 2])), "1 -> 2 -> nil\n");
    assert_eq!(render(|o| write_chain(o, Vec::new())), "nil\n");
}

#[test]
fn test_write_chain_partial() {
    assert_eq!(
        render(|o| write_chain_partial(o, vec![1, 2, 3], 2)),
        "1 -> 2 -> ... (and more)\n"
    );
    // Exactly `max` values: the chain ends, no "and more"
    assert_eq!(
        render(|o| write_chain_partial(o, vec![1, 2], 2)),
        "1 -> 2 -> nil\n"
    );
    assert_eq!(render(|o| write_chain_partial(o, vec![5], 20)), "5 -> nil\n");
}

#[test]
fn test_write_header() {
    assert_eq!(
        render(|o| write_header(o, "Sort")),
        "========\n  Sort  \n========\n"
    );
    assert_eq!(render(|o| write_sub_header(o, "Mode")), "\n=== Mode ===\n");
}

// ──────────────────────────────────────────────────
// Performance reports
// ──────────────────────────────────────────────────

#[test]
fn test_write_performance() {
    let text = render(|o| write_performance(o, &run(1000, Duration::from_micros(1500), true)));
    assert!(text.starts_with("\n✅ Sorting completed in: 1.5ms\n"));
    assert!(text.contains("📊 Performance: 1000 numbers sorted\n"));
    assert!(text.contains("⚡ Average time per number: 1.50 μs\n"));
}

#[test]
fn test_write_detailed_performance() {
    let text = render(|o| {
        write_detailed_performance(o, &run(1024, Duration::from_micros(1024), true))
    });
    assert!(text.contains("✅ Verification: List is correctly sorted!"));
    assert!(text.contains("📈 Theoretical O(n log n): 10240 operations"));
    assert!(text.contains("⏱️  Time per operation: 100.00 ns"));

    let text = render(|o| {
        write_detailed_performance(o, &run(4, Duration::from_nanos(10), false))
    });
    assert!(text.contains("❌ Warning: List may not be correctly sorted!"));
}

#[test]
fn test_write_benchmark_summary() {
    let summary = BenchmarkSummary::from_results(
        Algorithm::MergeSort,
        vec![
            BenchmarkResult {
                count: 500,
                duration: Duration::from_micros(100),
                is_sorted: true,
            },
            BenchmarkResult {
                count: 1000,
                duration: Duration::from_micros(250),
                is_sorted: false,
            },
        ],
    );
    let text = render(|o| write_benchmark_summary(o, &summary));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "=".repeat(60));
    assert_eq!(lines[2], "               BENCHMARK SUMMARY");
    assert!(lines[4].starts_with("Count        Time            μs/number"));
    assert_eq!(lines[5], "-".repeat(60));
    assert!(lines[6].starts_with("500          100µs           0.20"));
    assert!(lines[6].contains("✅"));
    assert!(lines[7].starts_with("1,000        250µs           0.25"));
    assert!(lines[7].contains("❌"));
    assert!(text.contains("📊 SCALING ANALYSIS:"));
    assert!(text.contains("   500 → 1,000: 2.00x size, 2.50x time"));
    assert!(text.contains("💡 Note:"));
}

#[test]
fn test_write_benchmark_summary_single_row_has_no_scaling() {
    let summary = BenchmarkSummary::from_results(
        Algorithm::BubbleSort,
        vec![BenchmarkResult {
            count: 10,
            duration: Duration::from_nanos(900),
            is_sorted: true,
        }],
    );
    let text = render(|o| write_benchmark_summary(o, &summary));
    assert!(!text.contains("SCALING"));
    assert!(text.ends_with(&format!("{}\n", "=".repeat(60))));
}
