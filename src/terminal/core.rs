//! Interactive menu for trying the sorting engines by hand.
//!
//! The terminal reads answers line by line from any `BufRead` and writes to
//! any `Write`, so a session can be scripted from memory. End of input ends
//! the session.
use std::io::{self, BufRead, Write};

use crate::bench::{
    Algorithm, BenchmarkSummary, DEFAULT_SIZES, SortRun, SortedOutput, benchmark_once, timed_sort,
};
use crate::format::{
    format_count, format_duration, format_number, write_benchmark_summary, write_chain,
    write_chain_partial, write_detailed_performance, write_performance, write_slice,
    write_slice_partial, write_sub_header,
};
use crate::generate::RandomGenerator;
use crate::input::{parse_bounded, parse_number, parse_yes_no};

/// Largest list the custom random mode will generate.
pub const MAX_CUSTOM_COUNT: i64 = 1_000_000;

/// Lists up to this size can be shown in full.
const SHOW_FULL_LIMIT: usize = 50;
/// Lists up to this size can have their head shown.
const SHOW_PARTIAL_LIMIT: usize = 1000;
const PARTIAL_COUNT: usize = 20;

/// Where control goes once a screen is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Stay,
    Back,
    Exit,
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
    generator: RandomGenerator,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_generator(input, output, RandomGenerator::new())
    }

    /// Terminal drawing its random lists from `generator`.
    pub fn with_generator(input: R, output: W, generator: RandomGenerator) -> Self {
        Terminal {
            input,
            output,
            generator,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the sorting menu until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the fsortkit terminal! 🚀")?;
        loop {
            self.write_sorting_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-5): ")? else {
                return self.output.flush();
            };
            let algorithm = match choice.as_str() {
                "1" => Algorithm::MergeSort,
                "2" => Algorithm::QuickSort,
                "3" => Algorithm::BubbleSort,
                "4" => Algorithm::InsertionSort,
                "5" => {
                    writeln!(self.output, "Goodbye!")?;
                    return self.output.flush();
                }
                _ => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please select a valid option (1-5)."
                    )?;
                    continue;
                }
            };
            if self.algorithm_menu(algorithm)? == Next::Exit {
                return self.output.flush();
            }
        }
    }

    fn write_sorting_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n\n[   Sorting Algorithms - Advanced Testing   ]")?;
        writeln!(self.output, "Choose a sorting algorithm:\n")?;
        for (i, algorithm) in Algorithm::all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, algorithm)?;
        }
        writeln!(self.output, "5. Quit\n")
    }

    fn algorithm_menu(&mut self, algorithm: Algorithm) -> io::Result<Next> {
        loop {
            self.write_algorithm_menu(algorithm)?;
            let Some(choice) = self.prompt("Enter your choice (1-8): ")? else {
                return Ok(Next::Exit);
            };
            let next = match choice.as_str() {
                "1" => self.run_manual_input(algorithm)?,
                "2" => self.run_custom_random(algorithm)?,
                "3" => self.run_benchmark(algorithm, DEFAULT_SIZES[0])?,
                "4" => self.run_benchmark(algorithm, DEFAULT_SIZES[1])?,
                "5" => self.run_benchmark(algorithm, DEFAULT_SIZES[2])?,
                "6" => self.run_benchmark(algorithm, DEFAULT_SIZES[3])?,
                "7" => self.run_all_benchmarks(algorithm)?,
                "8" => Next::Back,
                _ => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please select a valid option (1-8)."
                    )?;
                    Next::Stay
                }
            };
            if next != Next::Stay {
                return Ok(next);
            }
        }
    }

    fn write_algorithm_menu(&mut self, algorithm: Algorithm) -> io::Result<()> {
        writeln!(self.output, "\n\n[   {} - Advanced Testing   ]", algorithm)?;
        writeln!(self.output, "Choose a testing option:\n")?;
        writeln!(self.output, "1. Manual input (enter numbers manually)")?;
        writeln!(self.output, "2. Custom random list (specify quantity)")?;
        for (i, &size) in DEFAULT_SIZES.iter().enumerate() {
            writeln!(
                self.output,
                "{}. Benchmark {} random numbers",
                i + 3,
                format_count(size)
            )?;
        }
        writeln!(self.output, "7. Run all benchmarks")?;
        writeln!(self.output, "8. Back to sorting menu\n")
    }

    fn run_manual_input(&mut self, algorithm: Algorithm) -> io::Result<Next> {
        write_sub_header(
            &mut self.output,
            &format!("{} - Manual Input Mode", algorithm),
        )?;
        writeln!(
            self.output,
            "Enter numbers one by one and press Enter. To stop and sort, just press Enter on an empty line."
        )?;

        let (numbers, ended) = self.collect_numbers()?;
        let next = if ended { Next::Exit } else { Next::Stay };
        if numbers.is_empty() {
            writeln!(self.output, "The list is empty. Nothing to sort.")?;
            return Ok(next);
        }

        let run = timed_sort(algorithm, &numbers);
        match &run.sorted {
            SortedOutput::Array(sorted) => {
                writeln!(self.output, "\nOriginal Array:")?;
                write_slice(&mut self.output, &numbers)?;
                writeln!(self.output, "Sorted Array:")?;
                write_slice(&mut self.output, sorted)?;
            }
            SortedOutput::Chain(list) => {
                writeln!(self.output, "\nOriginal List:")?;
                write_slice(&mut self.output, &numbers)?;
                writeln!(self.output, "Sorted List:")?;
                write_chain(&mut self.output, list)?;
            }
        }
        write_performance(&mut self.output, &run)?;
        Ok(next)
    }

    /// Read one integer per line until a blank line. The flag is set when
    /// input ran out before the blank line.
    fn collect_numbers(&mut self) -> io::Result<(Vec<i64>, bool)> {
        let mut numbers = Vec::new();
        loop {
            let Some(line) = self.prompt("Enter a number: ")? else {
                return Ok((numbers, true));
            };
            if line.is_empty() {
                return Ok((numbers, false));
            }
            match parse_number(&line) {
                Ok(n) => numbers.push(n),
                Err(_) => writeln!(self.output, "Invalid input. Please enter an integer.")?,
            }
        }
    }

    fn run_custom_random(&mut self, algorithm: Algorithm) -> io::Result<Next> {
        write_sub_header(
            &mut self.output,
            &format!("{} - Custom Random List Mode", algorithm),
        )?;
        let Some(answer) = self.prompt(&format!(
            "Enter the number of random numbers to generate (1-{}): ",
            format_number(MAX_CUSTOM_COUNT)
        ))?
        else {
            return Ok(Next::Exit);
        };
        let count = match parse_bounded(&answer, 1, MAX_CUSTOM_COUNT) {
            Ok(n) => n as usize,
            Err(_) => {
                writeln!(
                    self.output,
                    "Invalid input. Please enter a number between 1 and {}.",
                    format_number(MAX_CUSTOM_COUNT)
                )?;
                return Ok(Next::Stay);
            }
        };

        let shown = format_count(count);
        writeln!(self.output, "\n🎲 Generating {} random numbers...", shown)?;
        let values = self.generator.generate_default(count);
        writeln!(
            self.output,
            "📝 Random list with {} numbers generated successfully!",
            shown
        )?;
        writeln!(self.output, "🔄 Starting sort...")?;

        let run = timed_sort(algorithm, &values);
        write_performance(&mut self.output, &run)?;
        self.offer_sorted_list(&run)
    }

    /// Offer the whole list when it is small, or its head when it is
    /// moderate. Larger lists are never offered.
    fn offer_sorted_list(&mut self, run: &SortRun) -> io::Result<Next> {
        let (question, heading, limit) = if run.count <= SHOW_FULL_LIMIT {
            (
                "\nDo you want to see the sorted list? (y/n): ".to_string(),
                "\nSorted List:".to_string(),
                None,
            )
        } else if run.count <= SHOW_PARTIAL_LIMIT {
            (
                format!(
                    "\nDo you want to see the first {} numbers of the sorted list? (y/n): ",
                    PARTIAL_COUNT
                ),
                format!("\nFirst {} numbers of sorted list:", PARTIAL_COUNT),
                Some(PARTIAL_COUNT),
            )
        } else {
            return Ok(Next::Stay);
        };

        let Some(answer) = self.prompt(&question)? else {
            return Ok(Next::Exit);
        };
        if !parse_yes_no(&answer) {
            return Ok(Next::Stay);
        }

        writeln!(self.output, "{}", heading)?;
        match (&run.sorted, limit) {
            (SortedOutput::Array(v), None) => write_slice(&mut self.output, v)?,
            (SortedOutput::Array(v), Some(max)) => write_slice_partial(&mut self.output, v, max)?,
            (SortedOutput::Chain(list), None) => write_chain(&mut self.output, list)?,
            (SortedOutput::Chain(list), Some(max)) => {
                write_chain_partial(&mut self.output, list, max)?
            }
        }
        Ok(Next::Stay)
    }

    fn run_benchmark(&mut self, algorithm: Algorithm, count: usize) -> io::Result<Next> {
        let shown = format_count(count);
        write_sub_header(
            &mut self.output,
            &format!("{} Benchmark: {} Random Numbers", algorithm, shown),
        )?;
        writeln!(self.output, "🎲 Generating {} random numbers...", shown)?;
        let values = self.generator.generate_default(count);
        writeln!(
            self.output,
            "📝 List with {} numbers generated successfully!",
            shown
        )?;
        writeln!(self.output, "🔄 Starting sort...")?;

        let run = timed_sort(algorithm, &values);
        write_detailed_performance(&mut self.output, &run)?;
        Ok(Next::Stay)
    }

    fn run_all_benchmarks(&mut self, algorithm: Algorithm) -> io::Result<Next> {
        write_sub_header(
            &mut self.output,
            &format!("{} - Running All Benchmarks", algorithm),
        )?;
        writeln!(
            self.output,
            "This will test sorting performance with different input sizes...\n"
        )?;

        let total = DEFAULT_SIZES.len();
        let mut results = Vec::with_capacity(total);
        for (i, &count) in DEFAULT_SIZES.iter().enumerate() {
            write!(
                self.output,
                "[{}/{}] Generating {} numbers... Sorting... ",
                i + 1,
                total,
                format_count(count)
            )?;
            self.output.flush()?;
            let result = benchmark_once(algorithm, count, &mut self.generator);
            let mark = if result.is_sorted { "✅" } else { "❌" };
            writeln!(
                self.output,
                "Done in {} {}",
                format_duration(result.duration),
                mark
            )?;
            results.push(result);
        }

        let summary = BenchmarkSummary::from_results(algorithm, results);
        write_benchmark_summary(&mut self.output, &summary)?;
        Ok(Next::Stay)
    }

    /// Write `text`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
