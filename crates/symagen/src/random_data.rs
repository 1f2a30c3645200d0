//! Generate random data for use in benchmarks and tests.

use distances::number::Float;
use rand::prelude::*;
use rayon::prelude::*;

/// Generate a randomized tabular dataset of floats for use in benchmarks and tests.
///
/// # Arguments:
///
/// * `cardinality`: number of points to generate.
/// * `dimensionality`: dimensionality of points to generate.
/// * `min_val`: of each axis in the hypercube.
/// * `max_val`: of each axis in the hypercube.
/// * `rng`: random number generator.
#[must_use]
pub fn random_tabular<T: Float, R: Rng>(
    cardinality: usize,
    dimensionality: usize,
    min_val: T,
    max_val: T,
    rng: &mut R,
) -> Vec<Vec<T>> {
    let diff = max_val - min_val;
    (0..cardinality)
        .map(|_| {
            (0..dimensionality)
                .map(|_| min_val + T::next_random(rng) * diff)
                .collect()
        })
        .collect()
}

/// Generate a presence/absence table, e.g. of genomes by gene families.
///
/// Each feature is given its own prevalence, drawn uniformly from `[0, 1)`,
/// and each observation contains the feature with that probability. Rows are
/// generated in parallel, each with its own generator derived from `seed`, so
/// the output depends only on the arguments.
///
/// # Arguments:
///
/// * `cardinality`: number of observations to generate.
/// * `dimensionality`: number of features.
/// * `seed`: for the random number generators.
#[must_use]
pub fn random_presence(cardinality: usize, dimensionality: usize, seed: u64) -> Vec<Vec<bool>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let prevalence = (0..dimensionality).map(|_| rng.gen::<f64>()).collect::<Vec<_>>();

    (0..cardinality)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(row_seed(seed, i));
            prevalence.iter().map(|&p| rng.gen_bool(p)).collect()
        })
        .collect()
}

/// Generate a presence/absence table whose observations fall into groups.
///
/// Each group has a random prototype profile. Members are copies of their
/// prototype with each feature flipped with probability `noise`.
///
/// # Arguments:
///
/// * `num_groups`: number of prototype profiles.
/// * `group_size`: number of observations per group.
/// * `dimensionality`: number of features.
/// * `noise`: probability of flipping each feature of a member, in `[0, 1]`.
/// * `seed`: for the random number generators.
///
/// # Returns
///
/// The rows, grouped contiguously, and the group index of each row.
#[must_use]
pub fn clustered_presence(
    num_groups: usize,
    group_size: usize,
    dimensionality: usize,
    noise: f64,
    seed: u64,
) -> (Vec<Vec<bool>>, Vec<usize>) {
    let prototypes = random_presence(num_groups, dimensionality, seed);

    let rows = (0..num_groups * group_size)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(row_seed(seed.wrapping_add(1), i));
            prototypes[i / group_size]
                .iter()
                .map(|&present| present ^ rng.gen_bool(noise))
                .collect()
        })
        .collect();

    let groups = (0..num_groups * group_size).map(|i| i / group_size).collect();

    (rows, groups)
}

/// Derives the seed of the generator for an individual row.
const fn row_seed(seed: u64, row: usize) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(row as u64)
}
