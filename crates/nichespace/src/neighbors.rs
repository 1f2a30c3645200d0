//! k-nearest-neighbor queries over computed distances.

use crate::{jobs::Jobs, matrix::DistanceMatrix, pairs::DistancePairs, sized_heap::SizedHeap, PairwiseError, Result};

/// Random access to the distances between observations by row.
pub trait DistanceLookup: Sync {
    /// The number of observations.
    fn cardinality(&self) -> usize;

    /// The distance between the observations at rows `i` and `j`, if stored.
    fn distance_by_index(&self, i: usize, j: usize) -> Option<f64>;

    /// Finds the `k` nearest other observations of every observation.
    ///
    /// The neighbors of each observation are `(row, distance)` pairs sorted
    /// by increasing distance, with ties broken by row. An observation is
    /// never its own neighbor.
    ///
    /// # Errors
    ///
    /// * `Shape` if `k` is not in `1..n`.
    /// * `Resource` if `n_jobs` cannot be satisfied.
    fn k_nearest(&self, k: usize, n_jobs: i32) -> Result<Vec<Vec<(usize, f64)>>> {
        let n = self.cardinality();
        if k == 0 || k >= n {
            return Err(PairwiseError::Shape(format!(
                "k must be between 1 and {} for {n} observations, got {k}.",
                n.saturating_sub(1)
            )));
        }

        let jobs = Jobs::resolve(n_jobs)?;
        ftlog::info!("Finding {k} nearest neighbors of {n} observations on {} threads...", jobs.num_threads());

        jobs.map((0..n).collect(), |i| {
            let mut heap = SizedHeap::new(k);
            heap.extend(
                (0..n)
                    .filter(|&j| j != i)
                    .filter_map(|j| self.distance_by_index(i, j).map(|d| (d, j))),
            );
            heap.into_sorted_vec().into_iter().map(|(d, j)| (j, d)).collect::<Vec<_>>()
        })
    }
}

impl<L: Send + Sync> DistanceLookup for DistanceMatrix<L> {
    fn cardinality(&self) -> usize {
        self.cardinality()
    }

    fn distance_by_index(&self, i: usize, j: usize) -> Option<f64> {
        self.get_by_index(i, j)
    }
}

impl<L: Send + Sync> DistanceLookup for DistancePairs<L> {
    fn cardinality(&self) -> usize {
        self.cardinality()
    }

    fn distance_by_index(&self, i: usize, j: usize) -> Option<f64> {
        self.get_by_index(i, j)
    }
}
