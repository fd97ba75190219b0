use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};

use sortkit_rs::bench::{Algorithm, BenchmarkSummary, DEFAULT_SIZES, benchmark_once};
use sortkit_rs::bubble_sort::{
    bubble_sort, bubble_sort_in_place, bubble_sort_in_place_optimized, bubble_sort_optimized,
    bubble_sort_with_observer,
};
use sortkit_rs::common::io::read_input;
use sortkit_rs::common::reset_sigpipe;
use sortkit_rs::format::{
    format_count, format_duration, write_benchmark_summary, write_header, write_lines, write_slice,
};
use sortkit_rs::generate::{DEFAULT_MAX, DEFAULT_MIN, DataOrder, RandomGenerator};
use sortkit_rs::input::parse_numbers;
use sortkit_rs::insertion_sort::{
    insertion_sort, insertion_sort_binary, insertion_sort_binary_in_place,
    insertion_sort_descending, insertion_sort_in_place, insertion_sort_with_gap,
    insertion_sort_with_observer,
};
use sortkit_rs::merge_sort::List;
use sortkit_rs::quick_sort::{PivotStrategy, quick_sort_in_place_with, quick_sort_with};
use sortkit_rs::terminal::Terminal;
use sortkit_rs::verify::{count_duplicates, find_min_max, is_sorted};
use sortkit_rs::{SortKitError, SortObserver};

const TOOL_NAME: &str = "fsortkit";

#[derive(Parser)]
#[command(
    name = "fsortkit",
    version,
    about = "Classic comparison sorts with timing and benchmarks",
    long_about = "Sort integers with merge, quick, insertion or bubble sort, generate \
                  random datasets, and benchmark the engines. With no subcommand an \
                  interactive menu is started."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Sort integers from arguments, a file or standard input
    #[command(allow_negative_numbers = true)]
    Sort(SortArgs),
    /// Print random integers, one per line
    #[command(allow_negative_numbers = true)]
    Generate(GenerateArgs),
    /// Time the engines on random datasets of several sizes
    Bench(BenchArgs),
    /// Start the interactive menu
    Menu,
}

#[derive(Args)]
struct SortArgs {
    /// Sorting engine: merge, quick, insertion or bubble
    #[arg(short = 'a', long = "algorithm", default_value = "merge")]
    algorithm: Algorithm,

    /// Pivot selection for quick sort (default: last)
    #[arg(long = "pivot", value_enum)]
    pivot: Option<PivotArg>,

    /// Engine variant (insertion: linear, binary, descending; bubble: naive, optimized)
    #[arg(long = "variant", value_enum)]
    variant: Option<VariantArg>,

    /// Run a single gapped insertion pass with stride N (negative means 0)
    #[arg(long = "gap", value_name = "N", conflicts_with = "variant")]
    gap: Option<i64>,

    /// Sort the input buffer in place instead of into a copy
    #[arg(long = "in-place")]
    in_place: bool,

    /// Print every swap or insertion to standard error
    #[arg(long = "trace", conflicts_with = "in_place")]
    trace: bool,

    /// Print the result as [a, b, c] instead of one value per line
    #[arg(long = "bracket")]
    bracket: bool,

    /// Print count, minimum, maximum and duplicates to standard error
    #[arg(long = "stats")]
    stats: bool,

    /// Read numbers from FILE ('-' for standard input)
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "numbers")]
    file: Option<String>,

    /// Check whether the input is already sorted; do not sort
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Numbers to sort
    numbers: Vec<i64>,
}

#[derive(Args)]
struct GenerateArgs {
    /// How many values to print
    #[arg(short = 'n', long = "count", value_name = "COUNT")]
    count: usize,

    /// Smallest value
    #[arg(long = "min", default_value_t = DEFAULT_MIN)]
    min: i64,

    /// Largest value
    #[arg(long = "max", default_value_t = DEFAULT_MAX)]
    max: i64,

    /// Seed for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Shape of the dataset
    #[arg(long = "order", value_enum, default_value_t = OrderArg::Random)]
    order: OrderArg,
}

#[derive(Args)]
struct BenchArgs {
    /// Engine to benchmark (default: all of them)
    #[arg(short = 'a', long = "algorithm")]
    algorithm: Option<Algorithm>,

    /// Dataset size; repeat for several (default: 500 1000 5000 10000)
    #[arg(long = "size", value_name = "N")]
    sizes: Vec<usize>,

    /// Seed for reproducible datasets
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Print the summaries as JSON
    #[arg(long = "json")]
    json: bool,

    /// Report progress on standard error
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PivotArg {
    Last,
    First,
    Middle,
    Random,
}

impl From<PivotArg> for PivotStrategy {
    fn from(arg: PivotArg) -> Self {
        match arg {
            PivotArg::Last => PivotStrategy::LastElement,
            PivotArg::First => PivotStrategy::FirstElement,
            PivotArg::Middle => PivotStrategy::MiddleElement,
            PivotArg::Random => PivotStrategy::RandomElement,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Linear,
    Binary,
    Descending,
    Naive,
    Optimized,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Random,
    Sorted,
    Reversed,
    NearlySorted,
}

impl From<OrderArg> for DataOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Random => DataOrder::Random,
            OrderArg::Sorted => DataOrder::Sorted,
            OrderArg::Reversed => DataOrder::Reversed,
            OrderArg::NearlySorted => DataOrder::NearlySorted,
        }
    }
}

/// Writes engine events to stderr.
struct TraceObserver;

impl SortObserver<i64> for TraceObserver {
    fn on_swap(&mut self, seq: &[i64], i: usize, j: usize) {
        eprintln!("swap {} <-> {}: {} {}", i, j, seq[i], seq[j]);
    }

    fn on_insert(&mut self, seq: &[i64], to: usize, from: usize) {
        eprintln!("insert {} -> {}: {}", from, to, seq[to]);
    }
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Command::Menu) {
        Command::Sort(args) => run_sort(args),
        Command::Generate(args) => run_generate(args).map(|()| 0),
        Command::Bench(args) => run_bench(args).map(|()| 0),
        Command::Menu => run_menu().map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}: {:#}", TOOL_NAME, e);
            process::exit(2);
        }
    }
}

fn load_numbers(args: &SortArgs) -> anyhow::Result<Vec<i64>> {
    if !args.numbers.is_empty() {
        return Ok(args.numbers.clone());
    }
    let name = args.file.as_deref().unwrap_or("-");
    let data = read_input(name)
        .map_err(SortKitError::from)
        .with_context(|| display_name(name).to_string())?;
    let numbers = parse_numbers(&data).with_context(|| display_name(name).to_string())?;
    Ok(numbers)
}

fn display_name(name: &str) -> &str {
    if name == "-" { "standard input" } else { name }
}

/// Exit status 0 when sorted, 1 with the first out-of-order value reported.
fn check_sorted(numbers: &[i64]) -> i32 {
    if is_sorted(numbers) {
        return 0;
    }
    if let Some(i) = numbers.windows(2).position(|w| w[0] > w[1]) {
        eprintln!(
            "{}: disorder at position {}: {}",
            TOOL_NAME,
            i + 2,
            numbers[i + 1]
        );
    }
    1
}

fn sort_numbers(args: &SortArgs, mut numbers: Vec<i64>) -> anyhow::Result<Vec<i64>> {
    let variant = args.variant;
    if args.pivot.is_some() && args.algorithm != Algorithm::QuickSort {
        bail!("--pivot applies to quick sort only");
    }
    match args.algorithm {
        Algorithm::MergeSort => {
            reject_options(args, "merge sort")?;
            Ok(List::from_slice(&numbers).sort().to_vec())
        }
        Algorithm::QuickSort => {
            if variant.is_some() || args.gap.is_some() || args.trace {
                bail!("quick sort takes --pivot and --in-place only");
            }
            let strategy = PivotStrategy::from(args.pivot.unwrap_or(PivotArg::Last));
            if args.in_place {
                quick_sort_in_place_with(&mut numbers, strategy);
                Ok(numbers)
            } else {
                Ok(quick_sort_with(&numbers, strategy))
            }
        }
        Algorithm::InsertionSort => {
            if let Some(gap) = args.gap {
                return Ok(insertion_sort_with_gap(&numbers, gap.max(0) as usize));
            }
            let variant = variant.unwrap_or(VariantArg::Linear);
            if args.trace {
                if variant != VariantArg::Linear {
                    bail!("--trace supports only the linear insertion variant");
                }
                return Ok(insertion_sort_with_observer(&numbers, TraceObserver));
            }
            match (variant, args.in_place) {
                (VariantArg::Linear, false) => Ok(insertion_sort(&numbers)),
                (VariantArg::Linear, true) => {
                    insertion_sort_in_place(&mut numbers);
                    Ok(numbers)
                }
                (VariantArg::Binary, false) => Ok(insertion_sort_binary(&numbers)),
                (VariantArg::Binary, true) => {
                    insertion_sort_binary_in_place(&mut numbers);
                    Ok(numbers)
                }
                (VariantArg::Descending, _) => Ok(insertion_sort_descending(&numbers)),
                _ => bail!("insertion sort variants are linear, binary and descending"),
            }
        }
        Algorithm::BubbleSort => {
            if args.gap.is_some() {
                bail!("--gap applies to insertion sort only");
            }
            let variant = variant.unwrap_or(VariantArg::Optimized);
            if args.trace {
                if variant != VariantArg::Optimized {
                    bail!("--trace supports only the optimized bubble variant");
                }
                return Ok(bubble_sort_with_observer(&numbers, TraceObserver));
            }
            match (variant, args.in_place) {
                (VariantArg::Naive, false) => Ok(bubble_sort(&numbers)),
                (VariantArg::Naive, true) => {
                    bubble_sort_in_place(&mut numbers);
                    Ok(numbers)
                }
                (VariantArg::Optimized, false) => Ok(bubble_sort_optimized(&numbers)),
                (VariantArg::Optimized, true) => {
                    bubble_sort_in_place_optimized(&mut numbers);
                    Ok(numbers)
                }
                _ => bail!("bubble sort variants are naive and optimized"),
            }
        }
    }
}

fn reject_options(args: &SortArgs, engine: &str) -> anyhow::Result<()> {
    if args.variant.is_some() || args.gap.is_some() || args.in_place || args.trace {
        bail!("{} takes no --variant, --gap, --in-place or --trace", engine);
    }
    Ok(())
}

fn run_sort(args: SortArgs) -> anyhow::Result<i32> {
    let numbers = load_numbers(&args)?;
    if args.check {
        return Ok(check_sorted(&numbers));
    }
    if numbers.is_empty() {
        return Err(SortKitError::EmptyInput.into());
    }

    if args.stats
        && let Some((min, max)) = find_min_max(&numbers)
    {
        eprintln!(
            "count {}, min {}, max {}, duplicated values {}",
            numbers.len(),
            min,
            max,
            count_duplicates(&numbers)
        );
    }

    let sorted = sort_numbers(&args, numbers)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.bracket {
        write_slice(&mut out, &sorted)?;
    } else {
        write_lines(&mut out, &sorted)?;
    }
    out.flush()?;
    Ok(0)
}

fn generator_for(seed: Option<u64>) -> RandomGenerator {
    match seed {
        Some(seed) => RandomGenerator::with_seed(seed),
        None => RandomGenerator::new(),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut generator = generator_for(args.seed);
    let values = generator.generate_ordered(args.order.into(), args.count, args.min, args.max);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_lines(&mut out, &values)?;
    out.flush()?;
    Ok(())
}

fn run_bench(args: BenchArgs) -> anyhow::Result<()> {
    let algorithms: Vec<Algorithm> = match args.algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::all().to_vec(),
    };
    let sizes = if args.sizes.is_empty() {
        DEFAULT_SIZES.to_vec()
    } else {
        args.sizes.clone()
    };
    let mut generator = generator_for(args.seed);

    let mut summaries = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let mut results = Vec::with_capacity(sizes.len());
        for (i, &count) in sizes.iter().enumerate() {
            let result = benchmark_once(algorithm, count, &mut generator);
            if args.verbose {
                eprintln!(
                    "{}: {} [{}/{}] {} numbers in {}",
                    TOOL_NAME,
                    algorithm,
                    i + 1,
                    sizes.len(),
                    format_count(count),
                    format_duration(result.duration)
                );
            }
            results.push(result);
        }
        summaries.push(BenchmarkSummary::from_results(algorithm, results));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        serde_json::to_writer_pretty(&mut out, &summaries).context("writing JSON")?;
        writeln!(out)?;
    } else {
        for summary in &summaries {
            write_header(&mut out, summary.algorithm.name())?;
            write_benchmark_summary(&mut out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_menu() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
    terminal.run()?;
    Ok(())
}
