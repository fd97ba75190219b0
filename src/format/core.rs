//! Text rendering for sorted data, timings and benchmark tables.
use std::io::{self, Write};
use std::time::Duration;

use crate::bench::{BenchmarkSummary, SortRun};

/// Width of the benchmark summary table.
const TABLE_WIDTH: usize = 60;

/// Format an integer with thousands separators: `1234567` -> `1,234,567`.
pub fn format_number(n: i64) -> String {
    let mut buf = itoa::Buffer::new();
    let digits = buf.format(n.unsigned_abs()).as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(d as char);
    }
    out
}

/// [`format_number`] for counts and sizes.
pub fn format_count(n: usize) -> String {
    format_number(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Render a duration in the largest fitting unit, trimming trailing zeros:
/// `0s`, `512ns`, `1.5µs`, `2.25ms`, `1.2s`, `1m30s`, `1h0m5s`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return format!("{}µs", fixed_point(nanos, 3));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", fixed_point(nanos, 6));
    }

    let total_secs = nanos / 1_000_000_000;
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let secs_nanos = (total_secs % 60) * 1_000_000_000 + nanos % 1_000_000_000;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&fixed_point(secs_nanos, 9));
    out.push('s');
    out
}

/// `value / 10^scale` with trailing fractional zeros dropped.
fn fixed_point(value: u128, scale: u32) -> String {
    let unit = 10u128.pow(scale);
    let mut buf = itoa::Buffer::new();
    let mut out = buf.format(value / unit).to_string();
    let mut frac = value % unit;
    if frac == 0 {
        return out;
    }
    let mut width = scale as usize;
    while frac % 10 == 0 {
        frac /= 10;
        width -= 1;
    }
    out.push('.');
    out.push_str(&format!("{:0width$}", frac, width = width));
    out
}

/// Write `values` one per line.
pub fn write_lines<W: Write>(out: &mut W, values: &[i64]) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    for &v in values {
        out.write_all(buf.format(v).as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn write_joined<W: Write>(out: &mut W, values: &[i64], sep: &[u8]) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            out.write_all(sep)?;
        }
        out.write_all(buf.format(v).as_bytes())?;
    }
    Ok(())
}

/// `[1, 2, 3]` followed by a newline.
pub fn write_slice<W: Write>(out: &mut W, values: &[i64]) -> io::Result<()> {
    out.write_all(b"[")?;
    write_joined(out, values, b", ")?;
    out.write_all(b"]\n")
}

/// The first `max` values in bracket form, with `, ... (and more)` appended
/// when some were left out.
pub fn write_slice_partial<W: Write>(out: &mut W, values: &[i64], max: usize) -> io::Result<()> {
    let shown = &values[..values.len().min(max)];
    out.write_all(b"[")?;
    write_joined(out, shown, b", ")?;
    if values.len() > max {
        out.write_all(b", ... (and more)]\n")
    } else {
        out.write_all(b"]\n")
    }
}

/// `1 -> 2 -> nil` followed by a newline.
pub fn write_chain<W: Write>(out: &mut W, values: impl IntoIterator<Item = i64>) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    for v in values {
        out.write_all(buf.format(v).as_bytes())?;
        out.write_all(b" -> ")?;
    }
    out.write_all(b"nil\n")
}

/// The first `max` chain values; ends in `... (and more)` when the chain
/// continues past them, `nil` otherwise.
pub fn write_chain_partial<W: Write>(
    out: &mut W,
    values: impl IntoIterator<Item = i64>,
    max: usize,
) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    let mut iter = values.into_iter();
    for v in iter.by_ref().take(max) {
        out.write_all(buf.format(v).as_bytes())?;
        out.write_all(b" -> ")?;
    }
    if iter.next().is_some() {
        out.write_all(b"... (and more)\n")
    } else {
        out.write_all(b"nil\n")
    }
}

/// Title framed by `=` borders four columns wider than the title.
pub fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let border = "=".repeat(title.chars().count() + 4);
    writeln!(out, "{}", border)?;
    writeln!(out, "  {}  ", title)?;
    writeln!(out, "{}", border)
}

pub fn write_sub_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n=== {} ===", title)
}

/// Completion time, element count and time per element.
pub fn write_performance<W: Write>(out: &mut W, run: &SortRun) -> io::Result<()> {
    writeln!(out, "\n✅ Sorting completed in: {}", format_duration(run.duration))?;
    writeln!(out, "📊 Performance: {} numbers sorted", run.count)?;
    writeln!(
        out,
        "⚡ Average time per number: {:.2} μs",
        run.analysis.time_per_number
    )
}

/// [`write_performance`] plus the order check and the `n log2 n` figures.
pub fn write_detailed_performance<W: Write>(out: &mut W, run: &SortRun) -> io::Result<()> {
    write_performance(out, run)?;
    if run.is_sorted {
        writeln!(out, "✅ Verification: List is correctly sorted!")?;
    } else {
        writeln!(out, "❌ Warning: List may not be correctly sorted!")?;
    }
    writeln!(
        out,
        "📈 Theoretical O(n log n): {:.0} operations",
        run.analysis.theoretical_ops
    )?;
    writeln!(
        out,
        "⏱️  Time per operation: {:.2} ns",
        run.analysis.time_per_operation
    )
}

/// Results table followed by the size/time scaling between consecutive rows.
pub fn write_benchmark_summary<W: Write>(out: &mut W, summary: &BenchmarkSummary) -> io::Result<()> {
    let rule = "=".repeat(TABLE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "               BENCHMARK SUMMARY")?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{:<12} {:<15} {:<15} {:<10}",
        "Count", "Time", "μs/number", "Status"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for result in &summary.results {
        let status = if result.is_sorted { "✅" } else { "❌" };
        writeln!(
            out,
            "{:<12} {:<15} {:<15.2} {:<10}",
            format_count(result.count),
            format_duration(result.duration),
            result.time_per_number(),
            status
        )?;
    }
    writeln!(out, "{}", rule)?;

    if summary.scaling.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n📊 SCALING ANALYSIS:")?;
    for scale in &summary.scaling {
        writeln!(
            out,
            "   {} → {}: {:.2}x size, {:.2}x time",
            format_count(scale.from_size),
            format_count(scale.to_size),
            scale.size_ratio,
            scale.time_ratio
        )?;
    }
    writeln!(out, "\n💡 Note: Performance depends on the algorithm complexity.")?;
    writeln!(
        out,
        "   For O(n log n) algorithms: Expected time ratio for 2x size: ~2.2x time"
    )
}
