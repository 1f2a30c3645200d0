//! Data generation utilities for testing.

use nichespace::Observations;
use rand::prelude::*;

/// Three genomes over three KEGG Orthologs.
///
/// The present features are `{0, 2}`, `{0, 1}` and `{2}`.
pub fn tiny() -> Observations<u8> {
    Observations::from_rows(vec![vec![1, 0, 1], vec![1, 1, 0], vec![0, 0, 1]])
        .unwrap_or_else(|e| unreachable!("{e}"))
}

pub fn presence(car: usize, dim: usize, seed: u64) -> Observations<bool> {
    let rows = symagen::random_data::random_presence(car, dim, seed);
    Observations::from_rows(rows).unwrap_or_else(|e| unreachable!("{e}"))
}

pub fn labelled_presence(car: usize, dim: usize, seed: u64) -> Observations<bool, String> {
    let rows = symagen::random_data::random_presence(car, dim, seed);
    let labels = (0..car).map(|i| format!("GCA_{i:06}")).collect();
    Observations::from_rows_labelled(rows, labels).unwrap_or_else(|e| unreachable!("{e}"))
}

pub fn tabular(car: usize, dim: usize, seed: u64) -> Observations<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = symagen::random_data::random_tabular(car, dim, -1.0, 1.0, &mut rng);
    Observations::from_rows(rows).unwrap_or_else(|e| unreachable!("{e}"))
}

pub fn available_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}
