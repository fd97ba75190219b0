//! Random dataset generation for manual runs and benchmarks.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Value range used when the caller does not pick one.
pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 1000;

/// Shape of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataOrder {
    #[default]
    Random,
    Sorted,
    Reversed,
    /// Ascending run with about 10% of positions swapped at random.
    NearlySorted,
}

impl DataOrder {
    pub fn name(self) -> &'static str {
        match self {
            DataOrder::Random => "random",
            DataOrder::Sorted => "sorted",
            DataOrder::Reversed => "reversed",
            DataOrder::NearlySorted => "nearly-sorted",
        }
    }
}

/// Seedable source of integer datasets.
pub struct RandomGenerator {
    rng: StdRng,
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        RandomGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator that produces the same datasets for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `count` values drawn uniformly from `min..=max`.
    /// Reversed bounds are swapped; a zero count yields an empty Vec.
    pub fn generate(&mut self, count: usize, min: i64, max: i64) -> Vec<i64> {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        (0..count).map(|_| self.rng.gen_range(lo..=hi)).collect()
    }

    /// `count` values from the default range 1..=1000.
    pub fn generate_default(&mut self, count: usize) -> Vec<i64> {
        self.generate(count, DEFAULT_MIN, DEFAULT_MAX)
    }

    pub fn generate_sorted(&mut self, count: usize, min: i64, max: i64) -> Vec<i64> {
        let mut values = self.generate(count, min, max);
        values.sort_unstable();
        values
    }

    pub fn generate_reversed(&mut self, count: usize, min: i64, max: i64) -> Vec<i64> {
        let mut values = self.generate_sorted(count, min, max);
        values.reverse();
        values
    }

    /// Sorted values with `count * swap_fraction` random position swaps.
    pub fn generate_nearly_sorted(
        &mut self,
        count: usize,
        min: i64,
        max: i64,
        swap_fraction: f64,
    ) -> Vec<i64> {
        let mut values = self.generate_sorted(count, min, max);
        if count < 2 {
            return values;
        }
        let swaps = (count as f64 * swap_fraction.clamp(0.0, 1.0)) as usize;
        for _ in 0..swaps {
            let i = self.rng.gen_range(0..count);
            let j = self.rng.gen_range(0..count);
            values.swap(i, j);
        }
        values
    }

    pub fn generate_ordered(
        &mut self,
        order: DataOrder,
        count: usize,
        min: i64,
        max: i64,
    ) -> Vec<i64> {
        match order {
            DataOrder::Random => self.generate(count, min, max),
            DataOrder::Sorted => self.generate_sorted(count, min, max),
            DataOrder::Reversed => self.generate_reversed(count, min, max),
            DataOrder::NearlySorted => self.generate_nearly_sorted(count, min, max, 0.1),
        }
    }

    /// Shuffle `values` in place (Fisher-Yates).
    pub fn shuffle(&mut self, values: &mut [i64]) {
        values.shuffle(&mut self.rng);
    }
}
